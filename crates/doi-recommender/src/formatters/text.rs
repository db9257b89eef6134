//! Plain-text output formatting for terminals.

use crate::models::{AuthorDirectory, Doi};
use crate::page::RecommendationList;

/// Format the rendered list, one numbered link per line.
#[must_use]
pub fn format_list_text(list: &RecommendationList) -> String {
    if list.is_empty() {
        return "No recommendations.".to_string();
    }

    let mut output = String::new();
    for (i, item) in list.items().iter().enumerate() {
        output.push_str(&format!("{:>3}. {}  {}\n", i + 1, item.link.text, item.link.href));
    }
    output
}

/// Format the author directory, one name per line.
#[must_use]
pub fn format_authors_text(directory: &AuthorDirectory) -> String {
    let mut output = String::new();
    for name in directory.iter() {
        output.push_str(name);
        output.push('\n');
    }
    output
}

/// Format a list of identifiers with their links.
#[must_use]
pub fn format_dois_text(dois: &[Doi]) -> String {
    dois.iter().map(|doi| format!("{doi}  {}\n", doi.url())).collect()
}
