use crate::algorithms::pagination::{BreakAnalysis, check_fit};
use folio_types::Size;

/// The per-render page cursor.
///
/// Created fresh for every render and dropped when it returns; never shared
/// between renders.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Zero-based index of the page currently being written.
    pub page_index: usize,
    /// Top of the next block, measured from the top edge of the page.
    pub cursor_y: f32,
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
}

impl RenderState {
    pub fn new(page: Size, margin: f32) -> Self {
        Self {
            page_index: 0,
            cursor_y: margin,
            page_width: page.width,
            page_height: page.height,
            margin,
        }
    }

    pub fn content_left(&self) -> f32 {
        self.margin
    }

    pub fn content_right(&self) -> f32 {
        self.page_width - self.margin
    }

    pub fn content_width(&self) -> f32 {
        (self.page_width - self.margin * 2.0).max(0.0)
    }

    /// Lowest y content may reach when `reserve` is kept free above the bottom margin.
    pub fn bottom_limit(&self, reserve: f32) -> f32 {
        self.page_height - self.margin - reserve
    }

    pub fn analyze(&self, height: f32, reserve: f32) -> BreakAnalysis {
        check_fit(self.cursor_y, height, self.bottom_limit(reserve))
    }

    /// True when the cursor sits at the top of a page, where breaking again
    /// would gain nothing.
    pub fn at_page_top(&self) -> bool {
        (self.cursor_y - self.margin).abs() < 0.01
    }

    pub fn advance(&mut self, dy: f32) {
        self.cursor_y += dy;
    }

    /// Move to the top of the next page.
    pub fn next_page(&mut self) {
        self.page_index += 1;
        self.cursor_y = self.margin;
    }

    pub fn page_count(&self) -> usize {
        self.page_index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_starts_at_top_margin() {
        let state = RenderState::new(Size::a4(), 15.0);
        assert_eq!(state.page_index, 0);
        assert_eq!(state.cursor_y, 15.0);
        assert_eq!(state.content_width(), 180.0);
        assert_eq!(state.bottom_limit(12.0), 270.0);
        assert!(state.at_page_top());
    }

    #[test]
    fn next_page_resets_cursor() {
        let mut state = RenderState::new(Size::a4(), 15.0);
        state.advance(120.0);
        assert!(!state.at_page_top());
        state.next_page();
        assert_eq!(state.page_index, 1);
        assert_eq!(state.page_count(), 2);
        assert_eq!(state.cursor_y, 15.0);
    }
}
