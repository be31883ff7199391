use super::{Frame, baseline};
use crate::variant::paint;
use folio_layout::{line_height_for, pt_to_mm};
use folio_render_core::{Align, Canvas, CanvasError, Paint, TextStyle};
use folio_types::{Point, Rect, Rgb};

const LOGO_RADIUS: f32 = 7.0;
const WATERMARK_GRAY: Rgb = Rgb::gray(232);

impl<C: Canvas + ?Sized> Frame<'_, C> {
    /// Issuer name on the left, document title on the right, over the
    /// template's band when it has one. Moves the cursor below the header.
    pub(super) fn draw_header(&mut self) -> Result<(), CanvasError> {
        let palette = self.template.palette;
        let layout = self.layout;
        let (width, height) = (self.state.page_width, self.state.page_height);
        let bands = self.bands();

        let ink = if self.uses_band() {
            if self.variant.paints_header_band() {
                paint(&mut *self.canvas, self.variant, &palette, width, height, bands)?;
            } else {
                let band = Rect::new(0.0, 0.0, width, layout.header_height);
                self.canvas.rect(band, Paint::Fill(palette.primary))?;
            }
            Rgb::WHITE
        } else {
            palette.primary
        };

        let left = self.state.content_left();
        let right = self.state.content_right();
        let title_base = self.state.cursor_y + pt_to_mm(layout.title_size) + 2.0;

        let mut name_x = left;
        if self.template.layout.show_logo {
            let center_y = title_base - pt_to_mm(layout.title_size) * 0.35;
            self.draw_logo(Point::new(left + LOGO_RADIUS, center_y), ink)?;
            name_x += LOGO_RADIUS * 2.0 + 4.0;
        }

        let title_style = self.style(self.title_font(), layout.title_size, ink);
        let issuer_name = self.issuer.company_name.trim();
        if !issuer_name.is_empty() {
            self.canvas.text(issuer_name, Point::new(name_x, title_base), &title_style)?;
        }
        let doc_title = self.config.labels.title(self.record.kind);
        self.canvas.text(
            doc_title,
            Point::new(right, title_base),
            &title_style.clone().aligned(Align::Right),
        )?;

        let contact_style = self.style(self.accent_font(), layout.small_size, ink);
        let mut y = title_base + line_height_for(layout.small_size) + 1.5;
        for line in self.issuer_lines() {
            if y > layout.header_height - 2.0 {
                break;
            }
            self.canvas.text(&line, Point::new(name_x, y), &contact_style)?;
            y += line_height_for(layout.small_size);
        }

        self.state.cursor_y = layout.header_height + layout.header_gap;
        Ok(())
    }

    /// Contact and address lines printed under the issuer name.
    fn issuer_lines(&self) -> Vec<String> {
        let issuer = self.issuer;
        let contact: Vec<&str> = [&issuer.email, &issuer.phone, &issuer.website]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let mut lines = Vec::new();
        if !contact.is_empty() {
            lines.push(contact.join("  |  "));
        }
        if !issuer.address.is_empty() {
            lines.push(issuer.address.join(", "));
        }
        if let Some(tax_id) = issuer.tax_id.as_deref().filter(|t| !t.trim().is_empty()) {
            lines.push(format!("Tax ID: {}", tax_id.trim()));
        }
        lines
    }

    /// Circular badge with the issuer's initials.
    fn draw_logo(&mut self, center: Point, ink: Rgb) -> Result<(), CanvasError> {
        let palette = self.template.palette;
        let badge_text = if ink == Rgb::WHITE { palette.primary } else { Rgb::WHITE };
        self.canvas.circle(center, LOGO_RADIUS, Paint::Fill(ink))?;
        let initials = self.issuer.initials();
        if initials.is_empty() {
            return Ok(());
        }
        let size = 12.0;
        let style = TextStyle::new(self.title_font(), size, badge_text).aligned(Align::Center);
        let y = center.y + pt_to_mm(size) * 0.35;
        self.canvas.text(&initials, Point::new(center.x, y), &style)
    }

    /// Large rotated text behind the content of the first page.
    pub(super) fn draw_watermark(&mut self) -> Result<(), CanvasError> {
        if !self.template.layout.show_watermark {
            return Ok(());
        }
        let Some(text) = self
            .config
            .watermark
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        else {
            return Ok(());
        };
        let style = self
            .style(self.title_font(), self.layout.watermark_size, WATERMARK_GRAY)
            .aligned(Align::Center)
            .rotated(self.layout.watermark_angle);
        let center = Point::new(self.state.page_width / 2.0, self.state.page_height / 2.0);
        self.canvas.text(text, center, &style)
    }

    /// Accent bar with the document number on the left and the date on the right.
    pub(super) fn draw_info_bar(&mut self) -> Result<(), CanvasError> {
        let layout = self.layout;
        let labels = &self.config.labels;
        let rect = Rect::new(
            self.state.content_left(),
            self.state.cursor_y,
            self.state.content_width(),
            layout.info_bar_height,
        );
        let palette = self.template.palette;
        self.boxes
            .draw(&mut *self.canvas, rect, layout.corner_radius, Paint::Fill(palette.accent))?;

        let style = self.style(self.body_bold(), layout.body_size, Rgb::WHITE);
        let y = baseline(rect.y, rect.height, layout.body_size);
        let number = format!(
            "{} {}",
            labels.number,
            self.record.number.as_deref().map(str::trim).unwrap_or("-")
        );
        let date = format!(
            "{}: {}",
            labels.date,
            self.config.display_date(self.record.date.as_deref())
        );
        self.canvas
            .text(&number, Point::new(rect.x + layout.box_padding, y), &style)?;
        self.canvas.text(
            &date,
            Point::new(rect.right() - layout.box_padding, y),
            &style.aligned(Align::Right),
        )?;

        self.state.advance(rect.height + layout.section_gap);
        Ok(())
    }
}
