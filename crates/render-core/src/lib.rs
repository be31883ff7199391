//! Canvas contract for the folio engine.
//!
//! - `Canvas` trait: the drawing primitives the composer issues
//! - `BoxStrategy`: rounded-box fallback probed once per render
//! - `RecordingCanvas`: in-memory canvas that records every call
//! - Error types and coordinate helpers shared by backends

mod canvas;
mod error;
pub mod recording;
mod strategy;
pub mod utils;

pub use canvas::{Align, Canvas, Paint, PathSegment, Primitive, TextStyle};
pub use error::CanvasError;
pub use recording::{DrawCommand, RecordingCanvas};
pub use strategy::BoxStrategy;
