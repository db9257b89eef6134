//! Recommender service client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - JSON content type on every request
//! - Strict status handling: only `200 OK` counts as success

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    AuthorDirectory, AuthorsResponse, Doi, DoisResponse, RecommendationRequest,
    RecommendationsResponse,
};

/// Operations the page needs from the recommender.
///
/// `RecommenderClient` is the production implementation; tests substitute
/// in-memory services.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    /// Fetch every author the recommender knows.
    async fn fetch_authors(&self) -> ClientResult<AuthorDirectory>;

    /// Fetch recommended articles for one author.
    async fn fetch_recommendations(&self, author: &str) -> ClientResult<Vec<Doi>>;
}

/// Recommender API client.
#[derive(Clone)]
pub struct RecommenderClient {
    /// HTTP client.
    client: Client,

    /// API base URL, always ending in `/`.
    api_url: Url,
}

impl RecommenderClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, api_url: base_url(&config.api_url)? })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Get every author in the dataset.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_authors(&self) -> ClientResult<AuthorDirectory> {
        let result: AuthorsResponse = self.get(api::AUTHORS_ROUTE).await?;
        tracing::debug!(count = result.authors.len(), "Fetched author directory");
        Ok(result.authors)
    }

    /// Get recommendations for an author.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_recommendations(&self, author: &str) -> ClientResult<Vec<Doi>> {
        let body = RecommendationRequest::new(author);
        let result: RecommendationsResponse =
            self.post(api::RECOMMENDATIONS_ROUTE, &body).await?;
        tracing::debug!(author, count = result.recommendations.len(), "Fetched recommendations");
        Ok(result.recommendations)
    }

    /// Get every article in the dataset.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_dois(&self) -> ClientResult<Vec<Doi>> {
        let result: DoisResponse = self.get(api::DOIS_ROUTE).await?;
        Ok(result.dois)
    }

    /// Make a GET request.
    async fn get<T>(&self, route: &str) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.api_url.join(route)?;
        tracing::trace!(%url, "GET");

        let response = self.client.get(url).send().await?;

        let response = self.handle_response(response).await?;
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }

    /// Make a POST request with a JSON body.
    async fn post<B, T>(&self, route: &str, body: &B) -> ClientResult<T>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = self.api_url.join(route)?;
        tracing::trace!(%url, "POST");

        let body_str = serde_json::to_string(body)?;

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body_str)
            .send()
            .await?;

        let response = self.handle_response(response).await?;
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status == StatusCode::OK {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(ClientError::unexpected_status(status.as_u16(), text))
    }
}

#[async_trait]
impl RecommendationService for RecommenderClient {
    async fn fetch_authors(&self) -> ClientResult<AuthorDirectory> {
        self.get_authors().await
    }

    async fn fetch_recommendations(&self, author: &str) -> ClientResult<Vec<Doi>> {
        self.get_recommendations(author).await
    }
}

impl std::fmt::Debug for RecommenderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommenderClient").field("api_url", &self.api_url.as_str()).finish()
    }
}

/// Parse a base URL so that routes join beneath it rather than replacing its last segment.
fn base_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}
