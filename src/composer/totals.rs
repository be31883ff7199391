use super::{Frame, baseline};
use crate::money::format_money;
use folio_render_core::{Align, Canvas, CanvasError, Paint};
use folio_types::{Point, Rect, Rgb};

impl<C: Canvas + ?Sized> Frame<'_, C> {
    /// Caption and amount pairs shown above the highlighted total.
    fn totals_rows(&self) -> Vec<(String, String)> {
        let labels = &self.config.labels;
        let record = self.record;
        let money = |v: f64| format_money(Some(v), self.currency);

        let mut rows = vec![
            (labels.subtotal.clone(), money(record.subtotal())),
            (labels.tax.clone(), money(record.tax())),
        ];
        if record.amount_paid.is_some() {
            rows.push((labels.amount_paid.clone(), format_money(record.amount_paid, self.currency)));
        }
        if record.change.is_some() {
            rows.push((labels.change.clone(), format_money(record.change, self.currency)));
        }
        rows
    }

    /// Right-anchored summary box plus the highlighted total row.
    pub(super) fn draw_totals(&mut self) -> Result<(), CanvasError> {
        let layout = self.layout;
        let rows = self.totals_rows();
        let box_height = rows.len() as f32 * layout.totals_row_height + layout.box_padding;
        let block = box_height + layout.total_row_height;
        self.ensure_space(block)?;

        let width = layout.totals_width.min(self.state.content_width());
        let x = self.state.content_right() - width;
        let top = self.state.cursor_y;
        let palette = self.template.palette;
        let pad = layout.box_padding;

        let summary = Rect::new(x, top, width, box_height);
        self.boxes.draw(
            &mut *self.canvas,
            summary,
            layout.corner_radius,
            Paint::Fill(palette.secondary.tint(0.92)),
        )?;

        let label_style = self.body_style();
        let value_style = label_style.clone().aligned(Align::Right);
        let mut row_top = top + pad / 2.0;
        for (label, value) in &rows {
            let y = baseline(row_top, layout.totals_row_height, layout.body_size);
            self.canvas.text(label, Point::new(x + pad, y), &label_style)?;
            self.canvas
                .text(value, Point::new(summary.right() - pad, y), &value_style)?;
            row_top += layout.totals_row_height;
        }

        let total_rect = Rect::new(x, summary.bottom(), width, layout.total_row_height);
        self.boxes.draw(
            &mut *self.canvas,
            total_rect,
            layout.corner_radius,
            Paint::Fill(palette.primary),
        )?;
        let strong = self.style(self.body_bold(), layout.heading_size, Rgb::WHITE);
        let y = baseline(total_rect.y, total_rect.height, layout.heading_size);
        let total = format_money(Some(self.record.total()), self.currency);
        self.canvas.text(
            &self.config.labels.total,
            Point::new(x + pad, y),
            &strong,
        )?;
        self.canvas.text(
            &total,
            Point::new(total_rect.right() - pad, y),
            &strong.aligned(Align::Right),
        )?;

        self.state.advance(block + layout.section_gap);
        Ok(())
    }
}
