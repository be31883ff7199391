use super::Frame;
use folio_layout::line_height_for;
use folio_render_core::{Align, Canvas, CanvasError, Paint};
use folio_types::{Point, Rect};
use itertools::Itertools;

impl<C: Canvas + ?Sized> Frame<'_, C> {
    /// Closing note, issuer contact and page number at the bottom of the last
    /// page.
    ///
    /// The footer never forces a page of its own: when the last block left too
    /// little room it is left out.
    pub(super) fn draw_footer(&mut self) -> Result<(), CanvasError> {
        if !self.template.layout.show_footer {
            return Ok(());
        }
        let layout = self.layout;
        let top = self.state.page_height - self.state.margin - layout.footer_height;
        // The last block left a trailing section gap; the footer brings its own.
        let content_end = (self.state.cursor_y - layout.section_gap).max(self.state.margin);
        if content_end + layout.footer_gap > top + 0.01 {
            log::warn!(
                "Footer omitted on page {}: content ends at {:.1}mm, footer needs to start by {:.1}mm",
                self.state.page_count(),
                content_end,
                top - layout.footer_gap
            );
            return Ok(());
        }

        let left = self.state.content_left();
        let width = self.state.content_width();
        let center = left + width / 2.0;
        let palette = self.template.palette;
        self.canvas
            .rect(Rect::new(left, top, width, 0.3), Paint::Fill(palette.secondary))?;

        let small = self.style(self.accent_font(), layout.small_size, palette.text);
        let step = line_height_for(layout.small_size);
        let mut y = top + step + 0.5;
        if let Some(note) = self
            .config
            .footer_note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
        {
            self.canvas
                .text(note, Point::new(center, y), &small.clone().aligned(Align::Center))?;
            y += step;
        }

        let issuer = self.issuer;
        let contact = [&issuer.email, &issuer.phone, &issuer.website]
            .into_iter()
            .filter_map(|v| v.as_deref().map(str::trim))
            .filter(|s| !s.is_empty())
            .join("  |  ");
        if !contact.is_empty() {
            self.canvas.text(
                &contact,
                Point::new(center, y),
                &small.clone().aligned(Align::Center),
            )?;
        }

        let pages = self.state.page_count();
        let page_label = format!("{} {} / {}", self.config.labels.page, pages, pages);
        self.canvas.text(
            &page_label,
            Point::new(left + width, top + step + 0.5),
            &small.aligned(Align::Right),
        )?;

        self.stats.footer_drawn = true;
        Ok(())
    }
}
