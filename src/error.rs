use folio_render_core::CanvasError;
use folio_traits::{CatalogError, PreferenceError};
use thiserror::Error;

/// Top-level error for rendering and its surrounding plumbing.
///
/// Only canvas failures can abort a render; template misses and malformed
/// record fields are absorbed before they get here.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Rendering failed: {0}")]
    Canvas(#[from] CanvasError),

    #[error("Template catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Preference store error: {0}")]
    Preference(#[from] PreferenceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
