//! Recommendation list rendering.

use crate::config::page;
use crate::models::Doi;

/// An anchor inside a list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Visible text: the identifier itself.
    pub text: String,
    /// `https://doi.org/<identifier>`
    pub href: String,
    /// Browsing context.
    pub target: &'static str,
    /// Style class.
    pub class: &'static str,
}

/// One `li` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Style class.
    pub class: &'static str,
    /// The only child.
    pub link: Link,
}

impl ListItem {
    fn for_doi(doi: &Doi) -> Self {
        Self {
            class: page::RECOMMENDATION_ITEM,
            link: Link {
                text: doi.as_str().to_string(),
                href: doi.url(),
                target: page::LINK_TARGET,
                class: page::RECOMMENDATION_LINK,
            },
        }
    }
}

/// The list container. Only the renderer operations mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationList {
    items: Vec<ListItem>,
}

impl RecommendationList {
    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append one entry linking to `doi`.
    pub fn render_one(&mut self, doi: &Doi) {
        self.items.push(ListItem::for_doi(doi));
    }

    /// Replace the whole list, preserving the order of `dois`.
    pub fn render_all(&mut self, dois: &[Doi]) {
        self.clear();
        for doi in dois {
            self.render_one(doi);
        }
    }

    /// Current entries in display order.
    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
