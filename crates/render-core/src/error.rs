use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    /// The canvas does not implement the requested primitive.
    #[error("Unsupported primitive: {0}")]
    Unsupported(&'static str),
    #[error("Font error: {0}")]
    Font(String),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CanvasError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, CanvasError::Unsupported(_))
    }
}
