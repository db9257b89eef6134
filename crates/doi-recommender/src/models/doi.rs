//! Article identifier model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::api;

/// An opaque Digital Object Identifier, e.g. `10.1103/PhysRevD.71.014028`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Doi(String);

impl Doi {
    /// Wrap an identifier as-is. No normalization is applied.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Link target resolving this identifier.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", api::DOI_RESOLVER, self.0)
    }
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Doi {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Doi {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        assert_eq!(Doi::new("10.1/abc").url(), "https://doi.org/10.1/abc");
    }

    #[test]
    fn test_url_keeps_identifier_verbatim() {
        let doi = Doi::new("10.1002/(SICI)1097-4636<1>");
        assert_eq!(doi.url(), "https://doi.org/10.1002/(SICI)1097-4636<1>");
        assert_eq!(doi.to_string(), "10.1002/(SICI)1097-4636<1>");
    }
}
