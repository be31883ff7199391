use super::builtin::builtin_templates;
use folio_traits::{TemplateCatalog, TemplateRepository};
use folio_types::{PartialTemplate, Template, TemplateId};
use std::sync::Arc;

/// The catalog the renderer reads: the built-in registry, optionally layered
/// with a repository of user templates.
///
/// Built-in ids always resolve to the built-in definition; a repository entry
/// reusing a built-in id is ignored.
#[derive(Debug, Clone)]
pub struct LayeredCatalog {
    repository: Option<Arc<dyn TemplateRepository>>,
    default_id: TemplateId,
}

impl Default for LayeredCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeredCatalog {
    pub fn new() -> Self {
        Self {
            repository: None,
            default_id: TemplateId::from(Template::BUILTIN_DEFAULT_ID),
        }
    }

    pub fn with_repository(mut self, repository: Arc<dyn TemplateRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Id served by [`TemplateCatalog::get_default`]. An id the catalog
    /// cannot serve makes `get_default` return `None`.
    pub fn with_default_id(mut self, id: impl Into<TemplateId>) -> Self {
        self.default_id = id.into();
        self
    }

    pub fn default_id(&self) -> &TemplateId {
        &self.default_id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_by_id(id).is_some()
    }

    fn builtin(id: &str) -> Option<PartialTemplate> {
        builtin_templates()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .map(PartialTemplate::from)
    }
}

impl TemplateCatalog for LayeredCatalog {
    fn get_by_id(&self, id: &str) -> Option<PartialTemplate> {
        Self::builtin(id).or_else(|| self.repository.as_ref()?.find(id))
    }

    fn get_default(&self) -> Option<PartialTemplate> {
        self.get_by_id(self.default_id.as_str())
    }

    fn list(&self) -> Vec<PartialTemplate> {
        let mut all: Vec<PartialTemplate> = builtin_templates()
            .iter()
            .cloned()
            .map(PartialTemplate::from)
            .collect();
        if let Some(repo) = &self.repository {
            for t in repo.all() {
                if Self::builtin(t.id.as_str()).is_some() {
                    log::debug!(
                        "Ignoring template '{}' from {}: id is reserved by a built-in",
                        t.id,
                        repo.name()
                    );
                    continue;
                }
                all.push(t);
            }
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::InMemoryTemplateRepository;

    fn user_repo() -> Arc<InMemoryTemplateRepository> {
        let repo = InMemoryTemplateRepository::new();
        let mut brand = PartialTemplate::new("brand");
        brand.name = Some("Brand".into());
        repo.insert(brand).unwrap();
        let mut hijack = PartialTemplate::new("classic");
        hijack.name = Some("Not Classic".into());
        repo.insert(hijack).unwrap();
        Arc::new(repo)
    }

    #[test]
    fn serves_builtins_without_repository() {
        let catalog = LayeredCatalog::new();
        assert!(catalog.get_by_id("modern").is_some());
        assert!(catalog.get_by_id("brand").is_none());
        assert_eq!(catalog.get_default().unwrap().id, "classic");
    }

    #[test]
    fn builtins_win_over_repository() {
        let catalog = LayeredCatalog::new().with_repository(user_repo());
        assert_eq!(catalog.get_by_id("classic").unwrap().name.as_deref(), Some("Classic"));
        assert!(catalog.contains("brand"));
        let listed = catalog.list();
        assert_eq!(listed.len(), builtin_templates().len() + 1);
        assert_eq!(listed.last().unwrap().id, "brand");
    }

    #[test]
    fn default_id_can_point_at_user_template() {
        let catalog = LayeredCatalog::new()
            .with_repository(user_repo())
            .with_default_id("brand");
        assert_eq!(catalog.get_default().unwrap().id, "brand");

        let missing = LayeredCatalog::new().with_default_id("gone");
        assert!(missing.get_default().is_none());
    }
}
