use folio_layout::MM_PER_PT;

/// Convert a layout y coordinate (top-left origin) to PDF space (bottom-left origin).
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Standard-14 PostScript name for a family, weight and style.
///
/// Unknown families map to Helvetica so a template naming an unavailable
/// font still renders.
pub fn standard_font_name(family: &str, bold: bool, italic: bool) -> &'static str {
    match (family.to_ascii_lowercase().as_str(), bold, italic) {
        ("times" | "times-roman" | "times new roman" | "serif", false, false) => "Times-Roman",
        ("times" | "times-roman" | "times new roman" | "serif", true, false) => "Times-Bold",
        ("times" | "times-roman" | "times new roman" | "serif", false, true) => "Times-Italic",
        ("times" | "times-roman" | "times new roman" | "serif", true, true) => "Times-BoldItalic",
        ("courier" | "courier new" | "monospace", false, false) => "Courier",
        ("courier" | "courier new" | "monospace", true, false) => "Courier-Bold",
        ("courier" | "courier new" | "monospace", false, true) => "Courier-Oblique",
        ("courier" | "courier new" | "monospace", true, true) => "Courier-BoldOblique",
        (_, false, false) => "Helvetica",
        (_, true, false) => "Helvetica-Bold",
        (_, false, true) => "Helvetica-Oblique",
        (_, true, true) => "Helvetica-BoldOblique",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_width_in_points() {
        assert!((mm_to_pt(210.0) - 595.28).abs() < 0.01);
    }

    #[test]
    fn font_names_fall_back_to_helvetica() {
        assert_eq!(standard_font_name("Times", true, false), "Times-Bold");
        assert_eq!(standard_font_name("courier", false, true), "Courier-Oblique");
        assert_eq!(standard_font_name("Inter", false, false), "Helvetica");
        assert_eq!(standard_font_name("Inter", true, true), "Helvetica-BoldOblique");
    }
}
