use crate::content::{PageOps, to_win_ansi};
use crate::metrics::string_width_pt;
use folio_layout::{MM_PER_PT, TextMetrics};
use folio_render_core::utils::{flip_y, mm_to_pt, standard_font_name};
use folio_render_core::{Align, Canvas, CanvasError, Paint, PathSegment, Primitive, TextStyle};
use folio_types::{FontSpec, FontStyle, Point, Rect, Size};
use lopdf::content::Content;
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;

/// Bezier handle length for approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// A [`Canvas`] that writes PDF through `lopdf`.
///
/// Pages are kept as operation lists until [`Canvas::output`] assembles the
/// document. Text uses the standard-14 fonts with WinAnsi encoding, so no font
/// files are embedded.
pub struct PdfCanvas {
    size: Size,
    pages: Vec<PageOps>,
    /// Base font name to resource name (`F1`, `F2`, ...), in first-use order.
    fonts: BTreeMap<&'static str, String>,
    title: Option<String>,
}

impl PdfCanvas {
    /// A canvas with one empty page of `size` millimetres.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pages: vec![PageOps::default()],
            fonts: BTreeMap::new(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn base_font(font: &FontSpec) -> &'static str {
        standard_font_name(&font.family, font.is_bold(), font.style == FontStyle::Italic)
    }

    fn font_resource(&mut self, base: &'static str) -> String {
        let next = format!("F{}", self.fonts.len() + 1);
        self.fonts.entry(base).or_insert(next).clone()
    }

    fn page_height_pt(&self) -> f32 {
        mm_to_pt(self.size.height)
    }

    /// Layout point in millimetres to PDF user space.
    fn to_pdf(&self, p: Point) -> (f32, f32) {
        (mm_to_pt(p.x), flip_y(mm_to_pt(p.y), self.page_height_pt()))
    }

    fn current(&mut self) -> &mut PageOps {
        // `pages` starts with one page and only grows.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn rounded_outline(&self, rect: Rect, radius: f32) -> Vec<PathSegment> {
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        let k = r * KAPPA;
        let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
        let p = Point::new;
        vec![
            PathSegment::MoveTo(p(x0 + r, y0)),
            PathSegment::LineTo(p(x1 - r, y0)),
            PathSegment::CurveTo(p(x1 - r + k, y0), p(x1, y0 + r - k), p(x1, y0 + r)),
            PathSegment::LineTo(p(x1, y1 - r)),
            PathSegment::CurveTo(p(x1, y1 - r + k), p(x1 - r + k, y1), p(x1 - r, y1)),
            PathSegment::LineTo(p(x0 + r, y1)),
            PathSegment::CurveTo(p(x0 + r - k, y1), p(x0, y1 - r + k), p(x0, y1 - r)),
            PathSegment::LineTo(p(x0, y0 + r)),
            PathSegment::CurveTo(p(x0, y0 + r - k), p(x0 + r - k, y0), p(x0 + r, y0)),
            PathSegment::Close,
        ]
    }

    fn circle_outline(center: Point, r: f32) -> Vec<PathSegment> {
        let k = r * KAPPA;
        let (cx, cy) = (center.x, center.y);
        let p = Point::new;
        vec![
            PathSegment::MoveTo(p(cx + r, cy)),
            PathSegment::CurveTo(p(cx + r, cy + k), p(cx + k, cy + r), p(cx, cy + r)),
            PathSegment::CurveTo(p(cx - k, cy + r), p(cx - r, cy + k), p(cx - r, cy)),
            PathSegment::CurveTo(p(cx - r, cy - k), p(cx - k, cy - r), p(cx, cy - r)),
            PathSegment::CurveTo(p(cx + k, cy - r), p(cx + r, cy - k), p(cx + r, cy)),
            PathSegment::Close,
        ]
    }

    fn draw_path(&mut self, segments: &[PathSegment], paint: Paint) {
        let converted: Vec<PathSegment> = segments
            .iter()
            .map(|seg| match *seg {
                PathSegment::MoveTo(a) => PathSegment::MoveTo(self.pdf_point(a)),
                PathSegment::LineTo(a) => PathSegment::LineTo(self.pdf_point(a)),
                PathSegment::CurveTo(a, b, c) => {
                    PathSegment::CurveTo(self.pdf_point(a), self.pdf_point(b), self.pdf_point(c))
                }
                PathSegment::Close => PathSegment::Close,
            })
            .collect();
        let page = self.current();
        page.set_paint(paint);
        page.path(&converted);
        page.paint(paint);
    }

    fn pdf_point(&self, p: Point) -> Point {
        let (x, y) = self.to_pdf(p);
        Point::new(x, y)
    }
}

impl TextMetrics for PdfCanvas {
    fn text_width(&self, text: &str, font: &FontSpec, size_pt: f32) -> f32 {
        string_width_pt(Self::base_font(font), text, size_pt) * MM_PER_PT
    }
}

impl Canvas for PdfCanvas {
    fn page_size(&self) -> Size {
        self.size
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn add_page(&mut self) -> Result<(), CanvasError> {
        self.pages.push(PageOps::default());
        log::debug!("PDF canvas now has {} pages", self.pages.len());
        Ok(())
    }

    fn rect(&mut self, rect: Rect, paint: Paint) -> Result<(), CanvasError> {
        let (x, top) = self.to_pdf(Point::new(rect.x, rect.y));
        let (w, h) = (mm_to_pt(rect.width), mm_to_pt(rect.height));
        let page = self.current();
        page.set_paint(paint);
        page.rect(x, top - h, w, h);
        page.paint(paint);
        Ok(())
    }

    fn rounded_rect(&mut self, rect: Rect, radius: f32, paint: Paint) -> Result<(), CanvasError> {
        let outline = self.rounded_outline(rect, radius);
        self.draw_path(&outline, paint);
        Ok(())
    }

    fn triangle(&mut self, points: [Point; 3], paint: Paint) -> Result<(), CanvasError> {
        let [a, b, c] = points;
        self.draw_path(
            &[
                PathSegment::MoveTo(a),
                PathSegment::LineTo(b),
                PathSegment::LineTo(c),
                PathSegment::Close,
            ],
            paint,
        );
        Ok(())
    }

    fn circle(&mut self, center: Point, radius: f32, paint: Paint) -> Result<(), CanvasError> {
        let outline = Self::circle_outline(center, radius);
        self.draw_path(&outline, paint);
        Ok(())
    }

    fn path(&mut self, segments: &[PathSegment], paint: Paint) -> Result<(), CanvasError> {
        self.draw_path(segments, paint);
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<(), CanvasError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let base = Self::base_font(&style.font);
        let resource = self.font_resource(base);
        let width = string_width_pt(base, text, style.size);
        let shift = match style.align {
            Align::Left => 0.0,
            Align::Center => -width / 2.0,
            Align::Right => -width,
        };

        let (x, y) = self.to_pdf(at);
        let (sin, cos) = style.rotation.to_radians().sin_cos();
        let matrix = [cos, sin, -sin, cos, x + shift * cos, y + shift * sin];

        let page = self.current();
        page.text(&resource, style.size, style.color, matrix, to_win_ansi(text));
        Ok(())
    }

    fn supports(&self, primitive: Primitive) -> bool {
        primitive != Primitive::RoundRect
    }

    fn output(&self) -> Result<Vec<u8>, CanvasError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font_dict = lopdf::Dictionary::new();
        for (base, resource) in &self.fonts {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => *base,
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(resource.as_bytes(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(dictionary! { "Font" => font_dict });

        let (width, height) = (mm_to_pt(self.size.width), mm_to_pt(self.size.height));
        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let content = Content {
                operations: page.operations().to_vec(),
            };
            let encoded = content
                .encode()
                .map_err(|e| CanvasError::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! { "Type" => "Pages", "Kids" => kids, "Count" => count }),
        );
        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog_id);

        if let Some(title) = &self.title {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::String(to_win_ansi(title), StringFormat::Literal),
                "Producer" => Object::string_literal("folio"),
            });
            doc.trailer.set("Info", info_id);
        }

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| CanvasError::Pdf(e.to_string()))?;
        Ok(buffer)
    }
}
