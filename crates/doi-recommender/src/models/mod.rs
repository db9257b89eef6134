//! Data models for the recommender service.
//!
//! Wire types mirror the service's JSON bodies; domain types wrap them
//! once a response has been accepted.

mod author;
mod doi;
mod responses;

pub use author::AuthorDirectory;
pub use doi::Doi;
pub use responses::{
    AuthorsResponse, DoisResponse, RecommendationRequest, RecommendationsResponse,
};
