use crate::metrics::line_height_for;
use folio_types::Size;
use serde::{Deserialize, Serialize};

/// Page and block geometry used by the composer.
///
/// Lengths are millimetres, `*_size` fields are font sizes in points.
/// Every field has a default, so a JSON config only needs the values it
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,

    /// Height of the header band on the first page.
    pub header_height: f32,
    /// Space between the header and the first content block.
    pub header_gap: f32,

    /// Space kept free above the bottom margin when deciding page breaks.
    ///
    /// The default equals `footer_gap + footer_height`, so a page filled to
    /// the reserve still has room for the footer. A smaller reserve lets
    /// content crowd the footer out, in which case it is omitted.
    pub footer_reserve: f32,
    pub footer_height: f32,
    pub footer_gap: f32,
    /// Height of the decorative band painted along the bottom page edge.
    pub footer_band_height: f32,

    pub info_bar_height: f32,
    pub section_gap: f32,

    pub box_padding: f32,
    pub box_gap: f32,
    pub corner_radius: f32,

    pub table_header_height: f32,
    pub min_row_height: f32,
    /// Vertical padding added to a row's wrapped text height.
    pub row_padding: f32,
    pub cell_padding: f32,
    pub qty_column: f32,
    pub price_column: f32,
    pub total_column: f32,

    pub totals_width: f32,
    pub totals_row_height: f32,
    pub total_row_height: f32,

    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub small_size: f32,
    pub watermark_size: f32,
    /// Counter-clockwise rotation of the watermark, in degrees.
    pub watermark_angle: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 15.0,
            header_height: 42.0,
            header_gap: 8.0,
            footer_reserve: 18.0,
            footer_height: 14.0,
            footer_gap: 4.0,
            footer_band_height: 10.0,
            info_bar_height: 9.0,
            section_gap: 6.0,
            box_padding: 4.0,
            box_gap: 6.0,
            corner_radius: 2.5,
            table_header_height: 9.0,
            min_row_height: 8.0,
            row_padding: 3.0,
            cell_padding: 2.5,
            qty_column: 18.0,
            price_column: 30.0,
            total_column: 32.0,
            totals_width: 82.0,
            totals_row_height: 6.5,
            total_row_height: 10.0,
            title_size: 20.0,
            heading_size: 10.5,
            body_size: 9.5,
            small_size: 8.0,
            watermark_size: 64.0,
            watermark_angle: 35.0,
        }
    }
}

impl LayoutConfig {
    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }

    /// Line height for body text.
    pub fn line_height(&self) -> f32 {
        line_height_for(self.body_size)
    }

    pub fn heading_line_height(&self) -> f32 {
        line_height_for(self.heading_size)
    }

    pub fn small_line_height(&self) -> f32 {
        line_height_for(self.small_size)
    }

    /// Width left for the description column once the fixed columns are placed.
    pub fn description_column(&self, content_width: f32) -> f32 {
        (content_width - self.qty_column - self.price_column - self.total_column).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg: LayoutConfig = serde_json::from_str(r#"{"margin": 20, "pageHeight": 200}"#).unwrap();
        assert_eq!(cfg.margin, 20.0);
        assert_eq!(cfg.page_height, 200.0);
        assert_eq!(cfg.page_width, LayoutConfig::default().page_width);
    }

    #[test]
    fn description_column_takes_remaining_width() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.description_column(180.0), 100.0);
        assert_eq!(cfg.description_column(50.0), 0.0);
    }
}
