//! Output formatters for HTML and plain text.

mod html;
mod text;

pub use html::*;
pub use text::*;
