//! Filesystem-backed collaborators for the folio engine.
//!
//! ## Available Implementations
//!
//! - [`DirectoryTemplateRepository`]: user templates stored as JSON files
//! - [`FilePreferenceStore`]: preferences persisted to a JSON object file
//!
//! ## Re-exports
//!
//! For convenience, the in-memory implementations from folio-traits:
//! - [`InMemoryTemplateRepository`]
//! - [`InMemoryPreferenceStore`]

mod directory;
mod preferences;

pub use directory::DirectoryTemplateRepository;
pub use preferences::FilePreferenceStore;

pub use folio_traits::{InMemoryPreferenceStore, InMemoryTemplateRepository};
