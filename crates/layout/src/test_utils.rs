use crate::metrics::{TextMetrics, pt_to_mm};
use folio_types::FontSpec;

/// Monospaced metrics: every character advances half the font size.
/// Keeps expected widths easy to compute by hand in tests.
pub struct FixedMetrics;

impl TextMetrics for FixedMetrics {
    fn text_width(&self, text: &str, _font: &FontSpec, size_pt: f32) -> f32 {
        text.chars().count() as f32 * pt_to_mm(size_pt) * 0.5
    }
}

/// Width in millimetres of `chars` characters under [`FixedMetrics`].
pub fn chars_width(chars: usize, size_pt: f32) -> f32 {
    chars as f32 * pt_to_mm(size_pt) * 0.5
}

pub fn body_font() -> FontSpec {
    FontSpec::new("helvetica")
}
