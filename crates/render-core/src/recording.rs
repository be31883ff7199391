//! A canvas that records draw calls instead of producing a document.
//!
//! Used by tests and dry runs to assert on what the composer drew and where.

use crate::canvas::{Canvas, Paint, PathSegment, Primitive, TextStyle};
use crate::error::CanvasError;
use folio_layout::{MM_PER_PT, TextMetrics};
use folio_types::{FontSpec, Point, Rect, Size};
use std::collections::HashSet;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    AddPage,
    Rect { page: usize, rect: Rect, paint: Paint },
    RoundedRect { page: usize, rect: Rect, radius: f32, paint: Paint },
    RoundRect { page: usize, rect: Rect, radius: f32, paint: Paint },
    Triangle { page: usize, points: [Point; 3], paint: Paint },
    Circle { page: usize, center: Point, radius: f32, paint: Paint },
    Path { page: usize, segments: Vec<PathSegment>, paint: Paint },
    Text { page: usize, text: String, at: Point, style: TextStyle },
}

impl DrawCommand {
    /// Page the command drew on; `None` for page breaks.
    pub fn page(&self) -> Option<usize> {
        match self {
            DrawCommand::AddPage => None,
            DrawCommand::Rect { page, .. }
            | DrawCommand::RoundedRect { page, .. }
            | DrawCommand::RoundRect { page, .. }
            | DrawCommand::Triangle { page, .. }
            | DrawCommand::Circle { page, .. }
            | DrawCommand::Path { page, .. }
            | DrawCommand::Text { page, .. } => Some(*page),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: Size,
    page_index: usize,
    commands: Vec<DrawCommand>,
    disabled: HashSet<Primitive>,
    failing: HashSet<Primitive>,
}

impl RecordingCanvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            page_index: 0,
            commands: Vec::new(),
            disabled: HashSet::new(),
            failing: HashSet::new(),
        }
    }

    /// Report `primitive` as unavailable.
    pub fn without(mut self, primitive: Primitive) -> Self {
        self.disabled.insert(primitive);
        self
    }

    /// Advertise `primitive` but reject every call to it.
    pub fn failing(mut self, primitive: Primitive) -> Self {
        self.failing.insert(primitive);
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn add_page_calls(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::AddPage))
            .count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of text runs exactly equal to `needle`.
    pub fn text_count(&self, needle: &str) -> usize {
        self.texts().into_iter().filter(|t| *t == needle).count()
    }

    /// Pages on which a text run equal to `needle` was drawn, in draw order.
    pub fn pages_with_text(&self, needle: &str) -> Vec<usize> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { page, text, .. } if text == needle => Some(*page),
                _ => None,
            })
            .collect()
    }

    pub fn find_text(&self, needle: &str) -> Option<(usize, Point, &TextStyle)> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text {
                page,
                text,
                at,
                style,
            } if text == needle => Some((*page, *at, style)),
            _ => None,
        })
    }

    fn check(&self, primitive: Primitive) -> Result<(), CanvasError> {
        if self.disabled.contains(&primitive) || self.failing.contains(&primitive) {
            return Err(CanvasError::Unsupported(primitive.name()));
        }
        Ok(())
    }
}

impl TextMetrics for RecordingCanvas {
    fn text_width(&self, text: &str, _font: &FontSpec, size_pt: f32) -> f32 {
        text.chars().count() as f32 * size_pt * 0.5 * MM_PER_PT
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> Size {
        self.size
    }

    fn page_count(&self) -> usize {
        self.page_index + 1
    }

    fn add_page(&mut self) -> Result<(), CanvasError> {
        self.page_index += 1;
        self.commands.push(DrawCommand::AddPage);
        Ok(())
    }

    fn rect(&mut self, rect: Rect, paint: Paint) -> Result<(), CanvasError> {
        let page = self.page_index;
        self.commands.push(DrawCommand::Rect { page, rect, paint });
        Ok(())
    }

    fn rounded_rect(&mut self, rect: Rect, radius: f32, paint: Paint) -> Result<(), CanvasError> {
        self.check(Primitive::RoundedRect)?;
        let page = self.page_index;
        self.commands.push(DrawCommand::RoundedRect { page, rect, radius, paint });
        Ok(())
    }

    fn round_rect(&mut self, rect: Rect, radius: f32, paint: Paint) -> Result<(), CanvasError> {
        self.check(Primitive::RoundRect)?;
        let page = self.page_index;
        self.commands.push(DrawCommand::RoundRect { page, rect, radius, paint });
        Ok(())
    }

    fn triangle(&mut self, points: [Point; 3], paint: Paint) -> Result<(), CanvasError> {
        self.check(Primitive::Triangle)?;
        let page = self.page_index;
        self.commands.push(DrawCommand::Triangle { page, points, paint });
        Ok(())
    }

    fn circle(&mut self, center: Point, radius: f32, paint: Paint) -> Result<(), CanvasError> {
        self.check(Primitive::Circle)?;
        let page = self.page_index;
        self.commands.push(DrawCommand::Circle { page, center, radius, paint });
        Ok(())
    }

    fn path(&mut self, segments: &[PathSegment], paint: Paint) -> Result<(), CanvasError> {
        self.check(Primitive::Path)?;
        let page = self.page_index;
        self.commands.push(DrawCommand::Path {
            page,
            segments: segments.to_vec(),
            paint,
        });
        Ok(())
    }

    fn text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<(), CanvasError> {
        let page = self.page_index;
        self.commands.push(DrawCommand::Text {
            page,
            text: text.to_string(),
            at,
            style: style.clone(),
        });
        Ok(())
    }

    fn supports(&self, primitive: Primitive) -> bool {
        !self.disabled.contains(&primitive)
    }

    /// One line per command, in draw order.
    fn output(&self) -> Result<Vec<u8>, CanvasError> {
        let mut out = String::new();
        for command in &self.commands {
            let _ = writeln!(out, "{:?}", command);
        }
        Ok(out.into_bytes())
    }
}
