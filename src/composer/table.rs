use super::{Frame, baseline};
use crate::money::{format_money, format_quantity};
use folio_render_core::{Align, Canvas, CanvasError, Paint};
use folio_types::{LineItem, Point, Rect, Rgb};

/// Right edges of the numeric columns and the width of the description column.
struct Columns {
    left: f32,
    width: f32,
    description: f32,
    qty_right: f32,
    price_right: f32,
    total_right: f32,
}

impl<C: Canvas + ?Sized> Frame<'_, C> {
    fn columns(&self) -> Columns {
        let layout = self.layout;
        let left = self.state.content_left();
        let width = self.state.content_width();
        let description = layout.description_column(width);
        let qty_right = left + description + layout.qty_column;
        let price_right = qty_right + layout.price_column;
        Columns {
            left,
            width,
            description,
            qty_right,
            price_right,
            total_right: left + width,
        }
    }

    pub(super) fn draw_table(&mut self) -> Result<(), CanvasError> {
        let layout = self.layout;
        // Keep the header row together with at least one row.
        // A break here already drew the header on the new page.
        let broke = self.ensure_space(layout.table_header_height + layout.min_row_height)?;
        if !broke {
            self.draw_table_header()?;
        }
        self.table_fresh_page = broke;

        let record = self.record;
        let items = &record.line_items;
        if items.is_empty() {
            log::debug!("Record has no line items; table has a header only");
        }
        for (index, item) in items.iter().enumerate() {
            self.draw_row(index, item)?;
        }
        self.state.advance(layout.section_gap);
        Ok(())
    }

    /// The colored column-caption row. Drawn once per page the table spans.
    pub(super) fn draw_table_header(&mut self) -> Result<(), CanvasError> {
        let layout = self.layout;
        let labels = &self.config.labels;
        let cols = self.columns();
        let palette = self.template.palette;
        let rect = Rect::new(cols.left, self.state.cursor_y, cols.width, layout.table_header_height);
        self.canvas.rect(rect, Paint::Fill(palette.primary))?;

        let style = self.style(self.body_bold(), layout.body_size, Rgb::WHITE);
        let right = style.clone().aligned(Align::Right);
        let y = baseline(rect.y, rect.height, layout.body_size);
        let pad = layout.cell_padding;
        self.canvas
            .text(&labels.description, Point::new(cols.left + pad, y), &style)?;
        self.canvas
            .text(&labels.quantity, Point::new(cols.qty_right - pad, y), &right)?;
        self.canvas
            .text(&labels.unit_price, Point::new(cols.price_right - pad, y), &right)?;
        self.canvas
            .text(&labels.amount, Point::new(cols.total_right - pad, y), &right)?;

        self.stats.table_header_rows += 1;
        self.state.advance(rect.height);
        Ok(())
    }

    fn draw_row(&mut self, index: usize, item: &LineItem) -> Result<(), CanvasError> {
        let layout = self.layout;
        let cols = self.columns();
        let font = self.body_font();
        let text_width = (cols.description - layout.cell_padding * 2.0).max(0.0);
        let lines = self.wrap(&item.description, text_width, &font, layout.body_size);
        let line_height = layout.line_height();
        let height = (lines.len() as f32 * line_height + layout.row_padding).max(layout.min_row_height);

        let reserve = layout.footer_reserve;
        if self.state.analyze(height, reserve).should_break && !self.table_fresh_page {
            self.page_break()?;
        }
        if self.state.analyze(height, reserve).should_break {
            log::warn!(
                "Row {} is {:.1}mm tall and does not fit on an empty page; drawing it anyway",
                index + 1,
                height
            );
        }

        let top = self.state.cursor_y;
        let palette = self.template.palette;
        if index % 2 == 0 {
            let shade = Rect::new(cols.left, top, cols.width, height);
            self.canvas.rect(shade, Paint::Fill(palette.secondary.tint(0.9)))?;
        }

        let style = self.body_style();
        let right = style.clone().aligned(Align::Right);
        let pad = layout.cell_padding;
        let first = top + layout.row_padding / 2.0;
        let first_baseline = baseline(first, line_height, layout.body_size);
        for (i, line) in lines.iter().enumerate() {
            let y = first_baseline + i as f32 * line_height;
            self.canvas.text(line, Point::new(cols.left + pad, y), &style)?;
        }

        let quantity = format_quantity(item.quantity());
        let price = format_money(Some(item.unit_price()), self.currency);
        let amount = format_money(Some(item.amount()), self.currency);
        self.canvas
            .text(&quantity, Point::new(cols.qty_right - pad, first_baseline), &right)?;
        self.canvas
            .text(&price, Point::new(cols.price_right - pad, first_baseline), &right)?;
        self.canvas
            .text(&amount, Point::new(cols.total_right - pad, first_baseline), &right)?;

        self.stats.item_rows += 1;
        self.table_fresh_page = false;
        self.state.advance(height);
        Ok(())
    }
}
