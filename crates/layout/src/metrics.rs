use folio_types::FontSpec;

/// Millimetres per typographic point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Leading applied to a font size to get its line height.
const LINE_SPACING: f32 = 1.3;

pub fn pt_to_mm(pt: f32) -> f32 {
    pt * MM_PER_PT
}

/// Line height in millimetres for a font size in points.
pub fn line_height_for(size_pt: f32) -> f32 {
    pt_to_mm(size_pt) * LINE_SPACING
}

/// A source of glyph advance widths.
///
/// Canvases implement this so that text is measured with the same metrics
/// it is later drawn with.
pub trait TextMetrics {
    /// Advance width of `text` in millimetres at `size_pt`.
    fn text_width(&self, text: &str, font: &FontSpec, size_pt: f32) -> f32;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn text_width(&self, text: &str, font: &FontSpec, size_pt: f32) -> f32 {
        (**self).text_width(text, font, size_pt)
    }
}
