//! Layout primitives shared by the composer and the canvases.
//!
//! - **text**: greedy line wrapping over a [`TextMetrics`] source
//! - **state**: the per-render page cursor
//! - **algorithms**: page-break analysis
//! - **config**: page and block geometry

pub mod algorithms;
pub mod config;
pub mod metrics;
pub mod state;
pub mod text;

pub use self::algorithms::pagination::{BreakAnalysis, check_fit};
pub use self::config::LayoutConfig;
pub use self::metrics::{MM_PER_PT, TextMetrics, line_height_for, pt_to_mm};
pub use self::state::RenderState;
pub use self::text::TextMeasurer;

// Re-export geometry types so downstream crates agree on one definition
pub use folio_types::geometry::{Point, Rect, Size};

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod text_test;
