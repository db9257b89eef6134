//! DOI Recommender Client
//!
//! Client for an article recommender that suggests papers (as DOIs) for an
//! author. Models the recommendation page: an author name field validated
//! against the service's author directory, and a list of links rendered from
//! the service's recommendations.
//!
//! # Features
//!
//! - **Strict protocol**: only `200 OK` responses are accepted
//! - **Load-then-interact**: submissions are only handled once the author directory is known
//! - **Renderers**: HTML (auto-escaped) and plain text
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use doi_recommender::{config::Config, page::Page, RecommenderClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = RecommenderClient::new(Config::new())?;
//!     let mut page = Page::load(Arc::new(client)).await;
//!
//!     if let Some(Ok(count)) = page.submit_name("Ada Lovelace").await {
//!         println!("{count} recommendations");
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod page;

pub use client::{RecommendationService, RecommenderClient};
pub use config::Config;
pub use error::{ClientError, PageError};
pub use page::{Page, PageState};
