//! Template registry, catalog layering and resolution.

mod builtin;
mod catalog;
mod resolver;

pub use builtin::{builtin, builtin_templates};
pub use catalog::LayeredCatalog;
pub use resolver::{TemplateSource, preferred_template_id, resolve, resolve_traced};
