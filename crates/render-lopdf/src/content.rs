//! Content-stream operations for one page, already in PDF user space.

use folio_render_core::{Paint, PathSegment};
use folio_types::Rgb;
use lopdf::content::Operation;
use lopdf::{Object, StringFormat};

fn color_operands(color: Rgb) -> Vec<Object> {
    let [r, g, b] = color.to_unit();
    vec![r.into(), g.into(), b.into()]
}

#[derive(Debug, Default, Clone)]
pub(crate) struct PageOps {
    operations: Vec<Operation>,
    fill: Option<Rgb>,
    stroke: Option<(Rgb, f32)>,
}

impl PageOps {
    pub(crate) fn operations(&self) -> &[Operation] {
        &self.operations
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn set_fill(&mut self, color: Rgb) {
        if self.fill != Some(color) {
            self.push("rg", color_operands(color));
            self.fill = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Rgb, width: f32) {
        if self.stroke != Some((color, width)) {
            self.push("RG", color_operands(color));
            self.push("w", vec![width.into()]);
            self.stroke = Some((color, width));
        }
    }

    /// Select colors and line width for the next shape. Widths are in points.
    pub(crate) fn set_paint(&mut self, paint: Paint) {
        match paint {
            Paint::Fill(c) => self.set_fill(c),
            Paint::Stroke { color, width } => self.set_stroke(color, width),
            Paint::FillStroke { fill, stroke, width } => {
                self.set_fill(fill);
                self.set_stroke(stroke, width);
            }
        }
    }

    /// Close the current shape with the operator `paint` calls for.
    pub(crate) fn paint(&mut self, paint: Paint) {
        let op = match paint {
            Paint::Fill(_) => "f",
            Paint::Stroke { .. } => "S",
            Paint::FillStroke { .. } => "B",
        };
        self.push(op, vec![]);
    }

    pub(crate) fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push("re", vec![x.into(), y.into(), w.into(), h.into()]);
    }

    pub(crate) fn path(&mut self, segments: &[PathSegment]) {
        for seg in segments {
            match *seg {
                PathSegment::MoveTo(p) => self.push("m", vec![p.x.into(), p.y.into()]),
                PathSegment::LineTo(p) => self.push("l", vec![p.x.into(), p.y.into()]),
                PathSegment::CurveTo(a, b, c) => self.push(
                    "c",
                    vec![
                        a.x.into(),
                        a.y.into(),
                        b.x.into(),
                        b.y.into(),
                        c.x.into(),
                        c.y.into(),
                    ],
                ),
                PathSegment::Close => self.push("h", vec![]),
            }
        }
    }

    /// One text object positioned by a full text matrix.
    pub(crate) fn text(&mut self, font: &str, size: f32, color: Rgb, matrix: [f32; 6], bytes: Vec<u8>) {
        self.set_fill(color);
        self.push("BT", vec![]);
        self.push("Tf", vec![Object::Name(font.as_bytes().to_vec()), size.into()]);
        self.push("Tm", matrix.iter().map(|v| (*v).into()).collect());
        self.push("Tj", vec![Object::String(bytes, StringFormat::Literal)]);
        self.push("ET", vec![]);
    }
}

/// Encode text for a WinAnsi font. Characters with no WinAnsi code become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
