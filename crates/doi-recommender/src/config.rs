//! Configuration for the DOI recommender client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL of the hosted recommender service.
    pub const BASE_URL: &str = "https://capstone-article-recommender-3e41bcce122c.herokuapp.com";

    /// Route listing every author in the dataset.
    pub const AUTHORS_ROUTE: &str = "authors";

    /// Route returning recommendations for one author.
    pub const RECOMMENDATIONS_ROUTE: &str = "recommendations";

    /// Route listing every article in the dataset.
    pub const DOIS_ROUTE: &str = "dois";

    /// Resolver prefix for article links.
    pub const DOI_RESOLVER: &str = "https://doi.org/";

    /// Request timeout. The hosted service cold-starts slowly.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Element selectors and class names of the recommendation page.
pub mod page {
    /// Name input element.
    pub const NAME_INPUT: &str = "#name";

    /// Error message element.
    pub const NAME_ERROR: &str = ".author-name__err";

    /// Class that makes the error message visible.
    pub const NAME_ERROR_ON: &str = "author-name__err--on-err";

    /// Submit button.
    pub const SUBMIT_BUTTON: &str = "#btn-submit";

    /// Recommendation list container.
    pub const RECOMMENDATIONS_LIST: &str = "#recommendations-list";

    /// Class applied to every list entry.
    pub const RECOMMENDATION_ITEM: &str = "recommendations-list__recommendation";

    /// Class applied to every link inside a list entry.
    pub const RECOMMENDATION_LINK: &str = "recommendations-list__link";

    /// Browsing context the links open in.
    pub const LINK_TARGET: &str = "_blank";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the recommender (for testing with mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create the configuration for the hosted recommender.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_uses_hosted_service() {
        let config = Config::default();
        assert_eq!(config.api_url, api::BASE_URL);
        assert_eq!(config.request_timeout, api::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:5000");
        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert!(config.request_timeout < api::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_error_class_is_scoped_to_error_element() {
        assert!(page::NAME_ERROR_ON.starts_with(page::NAME_ERROR.trim_start_matches('.')));
    }
}
