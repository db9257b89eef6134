//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use doi_recommender::client::RecommenderClient;
use doi_recommender::config::Config;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_targets_hosted_service() {
    let config = Config::default();
    assert!(config.api_url.starts_with("https://"));
}

#[test]
fn test_config_clone_preserves_url() {
    let config = Config::for_testing("http://localhost:1234");
    let cloned = config.clone();
    assert_eq!(config.api_url, cloned.api_url);
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = RecommenderClient::new(Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_rejects_invalid_base_url() {
    let client = RecommenderClient::new(Config::for_testing("not a url"));
    assert!(client.is_err());
}

#[test]
fn test_client_normalizes_trailing_slash() {
    let client = RecommenderClient::new(Config::for_testing("http://localhost:1234")).unwrap();
    assert_eq!(client.api_url().as_str(), "http://localhost:1234/");
}

#[test]
fn test_client_debug_shows_url() {
    let client = RecommenderClient::new(Config::for_testing("http://localhost:1234")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("RecommenderClient"));
    assert!(debug.contains("localhost:1234"));
}

#[test]
fn test_client_is_cloneable() {
    let client = RecommenderClient::new(Config::default()).unwrap();
    let _cloned = client.clone();
}
