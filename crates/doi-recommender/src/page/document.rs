//! In-memory model of the recommendation page.

use crate::config::page;

use super::renderer::RecommendationList;

/// The author name text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    value: String,
}

impl NameInput {
    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text, as typing would.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// The validation message next to the name field.
///
/// Always carries its base class; visibility is the extra error-state class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessage {
    on_error: bool,
}

impl ErrorMessage {
    /// Add the error-state class.
    pub fn show(&mut self) {
        self.on_error = true;
    }

    /// Remove the error-state class.
    pub fn hide(&mut self) {
        self.on_error = false;
    }

    /// Whether the error-state class is present.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.on_error
    }

    /// Class list as it would appear on the element.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec![page::NAME_ERROR.trim_start_matches('.')];
        if self.on_error {
            classes.push(page::NAME_ERROR_ON);
        }
        classes
    }
}

/// Every element the page logic touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// `#name`
    pub name_input: NameInput,

    /// `.author-name__err`
    pub name_error: ErrorMessage,

    /// `#recommendations-list`
    pub recommendations: RecommendationList,
}

impl Document {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the form back into its initial state. The list is untouched.
    pub fn reset_form(&mut self) {
        self.name_input.clear();
        self.name_error.hide();
    }
}
