//! PDF canvas using lopdf.
//!
//! Draws with the standard-14 fonts, so documents need no font files and
//! text measurement comes from built-in width tables.

mod canvas;
mod content;
pub mod metrics;

pub use canvas::PdfCanvas;
pub use content::to_win_ansi;
