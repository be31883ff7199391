use crate::config::RenderConfig;
use crate::error::FolioError;
use crate::renderer::DocumentRenderer;
use crate::templates::LayeredCatalog;
use folio_traits::{CatalogError, PreferenceStore, TemplateRepository};
use folio_types::TemplateId;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a [`DocumentRenderer`].
#[derive(Debug, Default)]
pub struct RendererBuilder {
    config: Option<RenderConfig>,
    repository: Option<Arc<dyn TemplateRepository>>,
    preferences: Option<Arc<dyn PreferenceStore>>,
    default_template: Option<TemplateId>,
}

impl RendererBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Loads the render configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, FolioError> {
        self.config = Some(RenderConfig::from_file(path)?);
        Ok(self)
    }

    /// User templates served alongside the built-ins.
    pub fn with_repository(mut self, repository: Arc<dyn TemplateRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Store consulted for the user's preferred template. Only read, never written.
    pub fn with_preferences(mut self, preferences: Arc<dyn PreferenceStore>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Template the catalog offers when no other candidate matches.
    pub fn with_default_template(mut self, id: impl Into<TemplateId>) -> Self {
        self.default_template = Some(id.into());
        self
    }

    /// Consumes the builder. Fails when the configuration is invalid or the
    /// chosen default template is unknown to the catalog.
    pub fn build(self) -> Result<DocumentRenderer, FolioError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let mut catalog = LayeredCatalog::new();
        if let Some(repository) = self.repository {
            log::debug!("Layering templates from {}", repository.name());
            catalog = catalog.with_repository(repository);
        }
        if let Some(id) = self.default_template {
            if !catalog.contains(id.as_str()) {
                return Err(CatalogError::NotFound(id.to_string()).into());
            }
            catalog = catalog.with_default_id(id);
        }

        Ok(DocumentRenderer::new(catalog, self.preferences, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::InMemoryTemplateRepository;
    use folio_types::PartialTemplate;

    #[test]
    fn unknown_default_template_is_rejected() {
        let err = RendererBuilder::new()
            .with_default_template("does-not-exist")
            .build()
            .unwrap_err();
        assert!(matches!(err, FolioError::Catalog(CatalogError::NotFound(_))));
    }

    #[test]
    fn default_template_may_come_from_repository() {
        let repo = InMemoryTemplateRepository::new();
        repo.insert(PartialTemplate::new("house")).unwrap();
        let renderer = RendererBuilder::new()
            .with_repository(Arc::new(repo))
            .with_default_template("house")
            .build()
            .unwrap();
        assert_eq!(renderer.catalog().default_id(), "house");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = RenderConfig::default();
        config.layout.margin = 200.0;
        let result = RendererBuilder::new().with_config(config).build();
        assert!(matches!(result, Err(FolioError::Config(_))));
    }
}
