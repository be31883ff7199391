//! Newtype wrapper for template identifiers.
//!
//! Template ids flow through several lookups (explicit request, record
//! reference, persisted preference, catalog default); the newtype keeps them
//! from being confused with other strings on the way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(Arc<str>);

impl TemplateId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TemplateId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TemplateId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for TemplateId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_their_text() {
        let mut ids: Vec<TemplateId> = ["modern", "classic", "elegant"]
            .into_iter()
            .map(TemplateId::from)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["classic", "elegant", "modern"]);
    }
}
