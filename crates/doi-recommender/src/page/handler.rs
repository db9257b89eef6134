//! Submission handling: validate the typed name, fetch, render.

use crate::client::RecommendationService;
use crate::error::{PageError, PageResult};
use crate::models::{AuthorDirectory, Doi};

use super::document::Document;

/// Handler attached to the submit control once the directory is known.
#[derive(Debug, Clone)]
pub struct SubmissionHandler {
    directory: AuthorDirectory,
}

impl SubmissionHandler {
    /// Create a handler validating against `directory`.
    #[must_use]
    pub const fn new(directory: AuthorDirectory) -> Self {
        Self { directory }
    }

    /// The snapshot used for validation.
    #[must_use]
    pub const fn directory(&self) -> &AuthorDirectory {
        &self.directory
    }

    /// Check the name field against the directory and update the error indicator.
    ///
    /// Returns the accepted name.
    pub fn validate(&self, document: &mut Document) -> PageResult<String> {
        let author = document.name_input.value().to_string();

        if !self.directory.contains(&author) {
            tracing::debug!(%author, "Rejected unknown author");
            document.name_error.show();
            return Err(PageError::validation(author));
        }

        document.name_error.hide();
        Ok(author)
    }

    /// Ask the service for recommendations. Failures are logged and returned.
    pub async fn request(
        &self,
        service: &dyn RecommendationService,
        author: &str,
    ) -> PageResult<Vec<Doi>> {
        service.fetch_recommendations(author).await.map_err(|e| {
            tracing::error!(author, error = %e, status = ?e.status(), "Fetch recommendations failed");
            PageError::from(e)
        })
    }

    /// Full submission: validate, fetch, and replace the rendered list.
    ///
    /// The list is only touched once a complete response is in hand.
    /// Returns the number of rendered entries.
    pub async fn submit(
        &self,
        service: &dyn RecommendationService,
        document: &mut Document,
    ) -> PageResult<usize> {
        let author = self.validate(document)?;
        let dois = self.request(service, &author).await?;
        document.recommendations.render_all(&dois);
        Ok(dois.len())
    }
}
