use super::Frame;
use folio_render_core::{Canvas, CanvasError, Paint};
use folio_types::{Point, Rect};

impl<C: Canvas + ?Sized> Frame<'_, C> {
    /// Free-text notes in a full-width box.
    ///
    /// The box moves to a new page whole when it fits there; notes longer
    /// than a page start in the remaining space and continue in one box per
    /// page.
    pub(super) fn draw_notes(&mut self) -> Result<(), CanvasError> {
        let record = self.record;
        let Some(notes) = record.notes() else {
            return Ok(());
        };
        let layout = self.layout;
        let pad = layout.box_padding;
        let chrome = pad * 2.0 + layout.heading_line_height();
        let line_height = layout.line_height();
        let text_width = (self.state.content_width() - pad * 2.0).max(0.0);
        let lines = self.wrap(notes, text_width, &self.body_font(), layout.body_size);

        let whole = chrome + lines.len() as f32 * line_height;
        let fresh_page = self.state.bottom_limit(layout.footer_reserve) - self.state.margin;
        if whole <= fresh_page {
            self.ensure_space(whole)?;
        }

        let mut rest: &[String] = &lines;
        while !rest.is_empty() {
            let limit = self.state.bottom_limit(layout.footer_reserve);
            let room = ((limit - self.state.cursor_y - chrome) / line_height + 0.01).floor();
            let fit = if room < 1.0 { 0 } else { room as usize };
            if fit == 0 && !self.state.at_page_top() {
                self.page_break()?;
                continue;
            }
            let take = fit.clamp(1, rest.len());
            let (chunk, tail) = rest.split_at(take);
            self.draw_notes_box(chunk)?;
            rest = tail;
            if !rest.is_empty() {
                self.page_break()?;
            }
        }
        Ok(())
    }

    fn draw_notes_box(&mut self, lines: &[String]) -> Result<(), CanvasError> {
        let layout = self.layout;
        let pad = layout.box_padding;
        let line_height = layout.line_height();
        let height = pad * 2.0 + layout.heading_line_height() + lines.len() as f32 * line_height;
        let rect = Rect::new(
            self.state.content_left(),
            self.state.cursor_y,
            self.state.content_width(),
            height,
        );
        let palette = self.template.palette;
        let paint = Paint::Stroke {
            color: palette.secondary.tint(0.4),
            width: 0.5,
        };
        self.boxes
            .draw(&mut *self.canvas, rect, layout.corner_radius, paint)?;

        let x = rect.x + pad;
        let mut y = rect.y + pad + layout.heading_line_height() * 0.75;
        let heading = self.heading_style();
        self.canvas
            .text(&self.config.labels.notes, Point::new(x, y), &heading)?;
        y += layout.heading_line_height() * 0.25 + line_height * 0.75;
        let body = self.body_style();
        for line in lines {
            self.canvas.text(line, Point::new(x, y), &body)?;
            y += line_height;
        }

        self.state.advance(height + layout.section_gap);
        Ok(())
    }
}
