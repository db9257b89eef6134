//! Error types for the DOI recommender client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Any status other than 200 OK
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The configured base URL cannot be joined with a route
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Create an unexpected status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status, message: message.into() }
    }

    /// HTTP status code, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Errors surfaced by the page while loading or handling a submission.
#[derive(thiserror::Error, Debug)]
pub enum PageError {
    /// Network or protocol failure talking to the recommender
    #[error("Recommender error: {0}")]
    Client(#[from] ClientError),

    /// Submitted name is not in the author directory
    #[error("Unknown author: {author:?}")]
    Validation {
        /// The rejected input
        author: String,
    },
}

impl PageError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(author: impl Into<String>) -> Self {
        Self::Validation { author: author.into() }
    }

    /// Returns true if this error came from the network rather than the input.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Client(_))
    }

    /// Convert to a message suitable for a terminal user.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Validation { author } => {
                format!("\"{author}\" is not an author in the recommender's dataset.")
            }
            Self::Client(ClientError::UnexpectedStatus { status, .. }) => {
                format!("The recommender answered with status {status}.")
            }
            Self::Client(_) => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for page operations.
pub type PageResult<T> = Result<T, PageError>;
