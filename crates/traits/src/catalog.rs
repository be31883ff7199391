//! Template lookup contracts.
//!
//! A [`TemplateCatalog`] is what the resolver reads from at render time. A
//! [`TemplateRepository`] is where user-made templates live; catalogs layer
//! one over the immutable built-in registry instead of mutating it.

use folio_types::{PartialTemplate, TemplateId};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for template repository operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Invalid template definition: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("Template store lock poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only template lookup used during rendering.
///
/// Entries are returned as [`PartialTemplate`]s; normalizing them into full
/// templates is the resolver's job.
pub trait TemplateCatalog: Send + Sync + Debug {
    fn get_by_id(&self, id: &str) -> Option<PartialTemplate>;

    /// The catalog's default template, if it has one.
    fn get_default(&self) -> Option<PartialTemplate>;

    /// Every template the catalog can serve, in display order.
    fn list(&self) -> Vec<PartialTemplate>;
}

/// A source of user-created templates.
pub trait TemplateRepository: Send + Sync + Debug {
    fn find(&self, id: &str) -> Option<PartialTemplate>;

    fn all(&self) -> Vec<PartialTemplate>;

    /// Returns a human-readable name for this repository (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// A repository held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryTemplateRepository {
    templates: RwLock<BTreeMap<TemplateId, PartialTemplate>>,
}

impl InMemoryTemplateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from a JSON array of partial templates.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let templates: Vec<PartialTemplate> = serde_json::from_str(json)?;
        let repo = Self::new();
        for t in templates {
            repo.insert(t)?;
        }
        Ok(repo)
    }

    /// Add or replace a template.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::LockPoisoned` if the internal lock is poisoned.
    pub fn insert(&self, template: PartialTemplate) -> Result<(), CatalogError> {
        let mut templates = self
            .templates
            .write()
            .map_err(|_| CatalogError::LockPoisoned)?;
        templates.insert(template.id.clone(), template);
        Ok(())
    }

    /// Remove a template, returning it if it was present.
    pub fn remove(&self, id: &str) -> Option<PartialTemplate> {
        self.templates.write().ok()?.remove(&TemplateId::from(id))
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.templates.read().map(|t| t.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.templates.read().map(|t| t.is_empty()).unwrap_or(true)
    }
}

impl TemplateRepository for InMemoryTemplateRepository {
    fn find(&self, id: &str) -> Option<PartialTemplate> {
        self.templates
            .read()
            .ok()?
            .get(&TemplateId::from(id))
            .cloned()
    }

    fn all(&self) -> Vec<PartialTemplate> {
        self.templates
            .read()
            .map(|t| t.values().cloned().collect())
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "InMemoryTemplateRepository"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_find_and_remove() {
        let repo = InMemoryTemplateRepository::new();
        assert!(repo.is_empty());
        repo.insert(PartialTemplate::new("mine")).unwrap();

        assert_eq!(repo.len(), 1);
        assert!(repo.find("mine").is_some());
        assert!(repo.find("yours").is_none());

        let removed = repo.remove("mine");
        assert!(removed.is_some());
        assert!(repo.find("mine").is_none());
        assert!(repo.remove("mine").is_none());
    }

    #[test]
    fn insert_replaces_existing_id() {
        let repo = InMemoryTemplateRepository::new();
        let mut t = PartialTemplate::new("mine");
        repo.insert(t.clone()).unwrap();
        t.name = Some("Renamed".into());
        repo.insert(t).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find("mine").unwrap().name.as_deref(), Some("Renamed"));
    }

    #[test]
    fn loads_json_array() {
        let repo = InMemoryTemplateRepository::from_json(
            r##"[{"id": "a", "palette": {"primary": "#000"}}, {"id": "b", "isPremium": true}]"##,
        )
        .unwrap();
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find("b").unwrap().is_premium, Some(true));
        assert_eq!(repo.all().len(), 2);
    }

    #[test]
    fn all_lists_templates_sorted_by_id() {
        let repo = InMemoryTemplateRepository::new();
        for id in ["zeta", "alpha", "mid"] {
            repo.insert(PartialTemplate::new(id)).unwrap();
        }
        let ids: Vec<String> = repo.all().into_iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = InMemoryTemplateRepository::from_json(r#"[{"name": "no id"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }
}
