//! Request and response bodies exchanged with the recommender service.

use serde::{Deserialize, Serialize};

use super::{AuthorDirectory, Doi};

/// Body of `GET /authors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorsResponse {
    /// Every author in the dataset.
    pub authors: AuthorDirectory,
}

/// Body of `POST /recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Exact author name.
    pub author: String,
}

impl RecommendationRequest {
    /// Create a request for one author.
    #[must_use]
    pub fn new(author: impl Into<String>) -> Self {
        Self { author: author.into() }
    }
}

/// Response of `POST /recommendations`.
///
/// The service also echoes a `headers` object; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    /// Recommended articles, best first.
    pub recommendations: Vec<Doi>,
}

/// Body of `GET /dois`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoisResponse {
    /// Every article in the dataset.
    pub dois: Vec<Doi>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(RecommendationRequest::new("Ada Lovelace")).unwrap();
        assert_eq!(body, serde_json::json!({"author": "Ada Lovelace"}));
    }

    #[test]
    fn test_recommendations_ignore_extra_fields() {
        let json = r#"{
            "recommendations": ["10.1/abc", "10.2/def"],
            "headers": {"Content-Type": "application/json"}
        }"#;
        let resp: RecommendationsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.recommendations, vec![Doi::new("10.1/abc"), Doi::new("10.2/def")]);
    }

    #[test]
    fn test_authors_missing_field_is_error() {
        assert!(serde_json::from_str::<AuthorsResponse>(r#"{"names": []}"#).is_err());
    }
}
