//! Author directory model.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Immutable snapshot of every author name the recommender knows.
///
/// Loaded once per page and shared read-only; cloning is a reference-count bump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AuthorDirectory {
    names: Arc<[String]>,
}

impl AuthorDirectory {
    /// Create a directory preserving the service's ordering.
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self { names: names.into() }
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of authors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in service order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for AuthorDirectory {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<AuthorDirectory> for Vec<String> {
    fn from(directory: AuthorDirectory) -> Self {
        directory.names.to_vec()
    }
}

impl FromIterator<String> for AuthorDirectory {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> AuthorDirectory {
        AuthorDirectory::new(vec!["Ada Lovelace".into(), "Alan Turing".into()])
    }

    #[test]
    fn test_contains_is_exact() {
        let dir = directory();
        assert!(dir.contains("Ada Lovelace"));
        assert!(!dir.contains("ada lovelace"));
        assert!(!dir.contains("Ada Lovelace "));
        assert!(!dir.contains("Ada"));
        assert!(!dir.contains(""));
    }

    #[test]
    fn test_preserves_order() {
        let dir = directory();
        let names: Vec<&str> = dir.iter().collect();
        assert_eq!(names, vec!["Ada Lovelace", "Alan Turing"]);
    }

    #[test]
    fn test_clone_shares_names() {
        let dir = directory();
        let cloned = dir.clone();
        assert!(Arc::ptr_eq(&dir.names, &cloned.names));
    }

    #[test]
    fn test_deserializes_from_array() {
        let dir: AuthorDirectory = serde_json::from_str(r#"["A", "B"]"#).unwrap();
        assert_eq!(dir.len(), 2);
        assert!(dir.contains("B"));
    }
}
