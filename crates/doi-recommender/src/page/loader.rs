//! Author directory loading.

use crate::client::RecommendationService;
use crate::error::ClientResult;
use crate::models::AuthorDirectory;

/// Fetch the directory once. Failures are logged here and returned.
pub async fn load_directory(service: &dyn RecommendationService) -> ClientResult<AuthorDirectory> {
    match service.fetch_authors().await {
        Ok(directory) => {
            tracing::info!(count = directory.len(), "Author directory loaded");
            Ok(directory)
        }
        Err(e) => {
            tracing::error!(error = %e, status = ?e.status(), "Fetch authors failed");
            Err(e)
        }
    }
}
