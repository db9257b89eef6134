//! The recommendation page: form, error indicator, and link list.
//!
//! A [`Page`] is loaded once. Only after the author directory arrives does the
//! submit control get a [`SubmissionHandler`]; until then, or forever if the
//! load fails, clicking submit does nothing.

mod document;
mod handler;
mod loader;
mod renderer;

use std::fmt;
use std::sync::Arc;

use crate::client::RecommendationService;
use crate::error::{ClientError, PageResult};

pub use document::{Document, ErrorMessage, NameInput};
pub use handler::SubmissionHandler;
pub use loader::load_directory;
pub use renderer::{Link, ListItem, RecommendationList};

/// Where the page is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Waiting for the author directory.
    LoadingDirectory,
    /// Directory load failed; submissions are ignored.
    Inert,
    /// Ready, nothing rendered by the last submission.
    Idle,
    /// Checking the typed name.
    Validating,
    /// Waiting for recommendations.
    Submitting,
    /// Ready, list shows the last successful response.
    Rendered,
}

impl PageState {
    /// Whether a submit handler is attached.
    #[must_use]
    pub const fn is_ready(self) -> bool {
        !matches!(self, Self::LoadingDirectory | Self::Inert)
    }
}

/// A loaded page bound to a recommender.
pub struct Page {
    service: Arc<dyn RecommendationService>,
    document: Document,
    handler: Option<SubmissionHandler>,
    state: PageState,
    load_error: Option<ClientError>,
}

impl Page {
    /// Load a fresh page.
    pub async fn load(service: Arc<dyn RecommendationService>) -> Self {
        Self::load_into(service, Document::new()).await
    }

    /// Load into an existing document. The form is reset before the directory is fetched.
    pub async fn load_into(service: Arc<dyn RecommendationService>, mut document: Document) -> Self {
        document.reset_form();

        let mut page = Self {
            service,
            document,
            handler: None,
            state: PageState::LoadingDirectory,
            load_error: None,
        };

        match load_directory(page.service.as_ref()).await {
            Ok(directory) => {
                page.handler = Some(SubmissionHandler::new(directory));
                page.state = PageState::Idle;
            }
            Err(e) => {
                page.load_error = Some(e);
                page.state = PageState::Inert;
            }
        }

        page
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PageState {
        self.state
    }

    /// Whether submit clicks are handled.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.handler.is_some()
    }

    /// Why the directory failed to load, if it did.
    #[must_use]
    pub const fn load_error(&self) -> Option<&ClientError> {
        self.load_error.as_ref()
    }

    /// The attached handler, if the directory loaded.
    #[must_use]
    pub const fn handler(&self) -> Option<&SubmissionHandler> {
        self.handler.as_ref()
    }

    /// Read-only view of the page elements.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Type into the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.document.name_input.set_value(name);
    }

    /// Click the submit control.
    ///
    /// Returns `None` when no handler is attached, otherwise the outcome of
    /// the submission: the number of rendered entries or the error that
    /// stopped it. On error the list keeps its previous contents.
    pub async fn click_submit(&mut self) -> Option<PageResult<usize>> {
        let Some(handler) = &self.handler else {
            tracing::debug!("Submit ignored, no handler attached");
            return None;
        };

        self.state = PageState::Validating;
        let author = match handler.validate(&mut self.document) {
            Ok(author) => author,
            Err(e) => {
                self.state = PageState::Idle;
                return Some(Err(e));
            }
        };

        self.state = PageState::Submitting;
        match handler.request(self.service.as_ref(), &author).await {
            Ok(dois) => {
                self.document.recommendations.render_all(&dois);
                self.state = PageState::Rendered;
                tracing::info!(%author, count = dois.len(), "Rendered recommendations");
                Some(Ok(dois.len()))
            }
            Err(e) => {
                self.state = PageState::Idle;
                Some(Err(e))
            }
        }
    }

    /// Type `name` and click submit.
    pub async fn submit_name(&mut self, name: impl Into<String>) -> Option<PageResult<usize>> {
        self.set_name(name);
        self.click_submit().await
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("state", &self.state)
            .field("document", &self.document)
            .field("load_error", &self.load_error)
            .finish_non_exhaustive()
    }
}
