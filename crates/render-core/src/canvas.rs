use crate::error::CanvasError;
use folio_layout::TextMetrics;
use folio_types::{FontSpec, Point, Rect, Rgb, Size};

/// How a closed shape is painted. Stroke widths are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Rgb),
    Stroke { color: Rgb, width: f32 },
    FillStroke { fill: Rgb, stroke: Rgb, width: f32 },
}

impl Paint {
    pub fn fill(color: Rgb) -> Self {
        Paint::Fill(color)
    }

    pub fn stroke(color: Rgb, width: f32) -> Self {
        Paint::Stroke { color, width }
    }

    pub fn fill_color(&self) -> Option<Rgb> {
        match self {
            Paint::Fill(c) | Paint::FillStroke { fill: c, .. } => Some(*c),
            Paint::Stroke { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Everything needed to place one run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontSpec,
    /// Font size in points.
    pub size: f32,
    pub color: Rgb,
    /// Horizontal alignment relative to the anchor x.
    pub align: Align,
    /// Counter-clockwise rotation around the anchor, in degrees.
    pub rotation: f32,
}

impl TextStyle {
    pub fn new(font: FontSpec, size: f32, color: Rgb) -> Self {
        Self {
            font,
            size,
            color,
            align: Align::Left,
            rotation: 0.0,
        }
    }

    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic bezier: two control points, then the end point.
    CurveTo(Point, Point, Point),
    Close,
}

/// Optional drawing primitives a canvas may lack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    RoundedRect,
    RoundRect,
    Triangle,
    Circle,
    Path,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::RoundedRect => "rounded_rect",
            Primitive::RoundRect => "round_rect",
            Primitive::Triangle => "triangle",
            Primitive::Circle => "circle",
            Primitive::Path => "path",
        }
    }
}

/// A paged drawing surface.
///
/// Coordinates are millimetres from the top-left corner of the current page.
/// Text anchors sit on the baseline. Implementations own the byte format
/// produced by [`Canvas::output`]; callers only issue drawing calls.
pub trait Canvas: TextMetrics {
    fn page_size(&self) -> Size;

    fn page_count(&self) -> usize;

    /// Start a new page; subsequent drawing lands on it.
    fn add_page(&mut self) -> Result<(), CanvasError>;

    fn rect(&mut self, rect: Rect, paint: Paint) -> Result<(), CanvasError>;

    fn rounded_rect(&mut self, _rect: Rect, _radius: f32, _paint: Paint) -> Result<(), CanvasError> {
        Err(CanvasError::Unsupported(Primitive::RoundedRect.name()))
    }

    /// Alternate rounded rectangle entry point some backends expose instead
    /// of [`Canvas::rounded_rect`].
    fn round_rect(&mut self, _rect: Rect, _radius: f32, _paint: Paint) -> Result<(), CanvasError> {
        Err(CanvasError::Unsupported(Primitive::RoundRect.name()))
    }

    fn triangle(&mut self, points: [Point; 3], paint: Paint) -> Result<(), CanvasError>;

    fn circle(&mut self, center: Point, radius: f32, paint: Paint) -> Result<(), CanvasError>;

    fn path(&mut self, segments: &[PathSegment], paint: Paint) -> Result<(), CanvasError>;

    fn text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<(), CanvasError>;

    /// Whether an optional primitive is implemented. Rounded rectangles are
    /// off unless a canvas says otherwise.
    fn supports(&self, primitive: Primitive) -> bool {
        !matches!(primitive, Primitive::RoundedRect | Primitive::RoundRect)
    }

    /// Serialize every page drawn so far.
    fn output(&self) -> Result<Vec<u8>, CanvasError>;

    fn save(&self, path: &std::path::Path) -> Result<(), CanvasError> {
        let bytes = self.output()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
