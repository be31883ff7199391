use super::Frame;
use folio_layout::{LayoutConfig, TextMeasurer};
use folio_render_core::{Canvas, CanvasError, Paint};
use folio_types::{Point, Rect};

/// Height shared by the party and payment boxes.
///
/// Both boxes take the height of the one with more lines, so they always
/// line up.
pub fn box_height(layout: &LayoutConfig, left_lines: usize, right_lines: usize) -> f32 {
    layout.box_padding * 2.0
        + layout.heading_line_height()
        + left_lines.max(right_lines) as f32 * layout.line_height()
}

impl<C: Canvas + ?Sized> Frame<'_, C> {
    pub(super) fn draw_boxes(&mut self) -> Result<(), CanvasError> {
        let layout = self.layout;
        let labels = &self.config.labels;
        let kind = self.record.kind;

        let gap = layout.box_gap;
        let width = ((self.state.content_width() - gap) / 2.0).max(0.0);
        let text_width = (width - layout.box_padding * 2.0).max(0.0);
        let font = self.body_font();

        let mut party = self.record.party.lines();
        if party.is_empty() {
            party.push(labels.party_placeholder(kind).to_string());
        }
        let payment = self.payment_lines();

        let measurer = TextMeasurer::new(&*self.canvas);
        let left = measurer.wrap_all(&party, text_width, &font, layout.body_size);
        let right = measurer.wrap_all(&payment, text_width, &font, layout.body_size);

        let height = box_height(layout, left.len(), right.len());
        self.stats.party_box_height = height;

        let top = self.state.cursor_y;
        let left_x = self.state.content_left();
        let columns = [
            (left_x, labels.party_heading(kind).to_string(), left),
            (left_x + width + gap, labels.payment.clone(), right),
        ];
        for (x, heading, lines) in columns {
            self.draw_box(Rect::new(x, top, width, height), &heading, &lines)?;
        }

        self.state.advance(height + layout.section_gap);
        Ok(())
    }

    fn payment_lines(&self) -> Vec<String> {
        let labels = &self.config.labels;
        let payment = &self.record.payment;
        let lines: Vec<String> = [
            (&labels.payment_method, &payment.method),
            (&labels.payment_reference, &payment.reference),
            (&labels.payment_status, &payment.status),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            let value = value.as_deref()?.trim();
            (!value.is_empty()).then(|| format!("{}: {}", label, value))
        })
        .collect();

        if lines.is_empty() {
            vec![labels.no_payment.clone()]
        } else {
            lines
        }
    }

    /// A rounded box with a heading line and pre-wrapped body lines.
    fn draw_box(&mut self, rect: Rect, heading: &str, lines: &[String]) -> Result<(), CanvasError> {
        let layout = self.layout;
        let palette = self.template.palette;
        let paint = Paint::FillStroke {
            fill: palette.secondary.tint(0.9),
            stroke: palette.secondary.tint(0.5),
            width: 0.5,
        };
        self.boxes
            .draw(&mut *self.canvas, rect, layout.corner_radius, paint)?;

        let x = rect.x + layout.box_padding;
        let mut y = rect.y + layout.box_padding + layout.heading_line_height() * 0.75;
        let heading_style = self.heading_style();
        self.canvas.text(heading, Point::new(x, y), &heading_style)?;

        y += layout.heading_line_height() * 0.25 + layout.line_height() * 0.75;
        let body = self.body_style();
        for line in lines {
            self.canvas.text(line, Point::new(x, y), &body)?;
            y += layout.line_height();
        }
        Ok(())
    }
}
