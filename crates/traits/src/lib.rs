pub mod catalog;
pub mod preference;

pub use catalog::{CatalogError, InMemoryTemplateRepository, TemplateCatalog, TemplateRepository};
pub use preference::{InMemoryPreferenceStore, PreferenceError, PreferenceStore, TEMPLATE_PREFERENCE_KEY};
