use super::Variant;
use folio_layout::LayoutConfig;
use folio_render_core::{Canvas, CanvasError, Paint, PathSegment};
use folio_types::{Palette, Point, Rect, Rgb};

/// Heights of the decorated header and footer bands, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub header: f32,
    pub footer: f32,
}

impl Bands {
    pub fn from_layout(layout: &LayoutConfig) -> Self {
        Self {
            header: layout.header_height,
            footer: layout.footer_band_height,
        }
    }
}

/// Paint both bands for `variant`. Background geometry only; never text.
pub fn paint<C: Canvas + ?Sized>(
    canvas: &mut C,
    variant: Variant,
    palette: &Palette,
    page_width: f32,
    page_height: f32,
    bands: Bands,
) -> Result<(), CanvasError> {
    paint_header(canvas, variant, palette, page_width, bands.header)?;
    paint_footer(canvas, variant, palette, page_width, page_height, bands.footer)
}

pub fn paint_header<C: Canvas + ?Sized>(
    canvas: &mut C,
    variant: Variant,
    palette: &Palette,
    w: f32,
    h: f32,
) -> Result<(), CanvasError> {
    let (primary, secondary) = (palette.primary, palette.secondary);
    match variant {
        Variant::Classic => {}
        Variant::Panel => {
            canvas.rect(Rect::new(0.0, 0.0, w, h), Paint::Fill(primary))?;
            canvas.rect(Rect::new(0.0, h, w, 1.5), Paint::Fill(secondary))?;
        }
        Variant::Stripe => {
            const STRIPES: usize = 12;
            let stripe = w / STRIPES as f32;
            for i in 0..STRIPES {
                let color = if i % 2 == 0 { primary } else { secondary };
                canvas.rect(Rect::new(i as f32 * stripe, 0.0, stripe, h), Paint::Fill(color))?;
            }
        }
        Variant::Angled => {
            canvas.triangle(
                [Point::new(w * 0.45, 0.0), Point::new(w, 0.0), Point::new(w, h)],
                Paint::Fill(secondary),
            )?;
            canvas.path(
                &polygon(&[
                    Point::new(0.0, 0.0),
                    Point::new(w * 0.72, 0.0),
                    Point::new(w * 0.58, h),
                    Point::new(0.0, h),
                ]),
                Paint::Fill(primary),
            )?;
        }
        Variant::Wave => {
            canvas.path(&header_wave(w, h, 0.85, 1.15, 0.55, 0.95), Paint::Fill(secondary))?;
            canvas.path(&header_wave(w, h, 0.7, 0.95, 0.45, 0.8), Paint::Fill(primary))?;
            let glow = primary.mix(Rgb::WHITE, 0.15);
            canvas.circle(Point::new(w * 0.92, h * 0.2), h * 0.22, Paint::Fill(glow))?;
            canvas.circle(Point::new(w * 0.8, h * 0.05), h * 0.12, Paint::Fill(glow))?;
        }
    }
    Ok(())
}

pub fn paint_footer<C: Canvas + ?Sized>(
    canvas: &mut C,
    variant: Variant,
    palette: &Palette,
    w: f32,
    page_height: f32,
    f: f32,
) -> Result<(), CanvasError> {
    let (primary, secondary) = (palette.primary, palette.secondary);
    let top = page_height - f;
    match variant {
        Variant::Classic => {}
        Variant::Panel => {
            canvas.rect(Rect::new(0.0, top, w * 0.42, f), Paint::Fill(primary))?;
        }
        Variant::Stripe => {
            canvas.rect(Rect::new(0.0, top, w * 0.7, f), Paint::Fill(primary))?;
            canvas.rect(
                Rect::new(w * 0.55, top + f * 0.35, w * 0.45, f * 0.65),
                Paint::Fill(secondary),
            )?;
        }
        Variant::Angled => {
            canvas.path(
                &polygon(&[
                    Point::new(0.0, page_height),
                    Point::new(0.0, top),
                    Point::new(w * 0.45, top),
                    Point::new(w * 0.55, page_height),
                ]),
                Paint::Fill(primary),
            )?;
        }
        Variant::Wave => {
            let p = Point::new;
            canvas.path(
                &[
                    PathSegment::MoveTo(p(0.0, page_height)),
                    PathSegment::LineTo(p(0.0, page_height - f * 0.7)),
                    PathSegment::CurveTo(
                        p(w * 0.3, page_height - f * 1.2),
                        p(w * 0.7, page_height - f * 0.2),
                        p(w, top),
                    ),
                    PathSegment::LineTo(p(w, page_height)),
                    PathSegment::Close,
                ],
                Paint::Fill(secondary),
            )?;
            canvas.path(
                &[
                    PathSegment::MoveTo(p(0.0, page_height)),
                    PathSegment::LineTo(p(0.0, page_height - f * 0.4)),
                    PathSegment::CurveTo(
                        p(w * 0.35, page_height - f * 0.9),
                        p(w * 0.65, page_height),
                        p(w, page_height - f * 0.55),
                    ),
                    PathSegment::LineTo(p(w, page_height)),
                    PathSegment::Close,
                ],
                Paint::Fill(primary),
            )?;
            canvas.circle(p(w * 0.08, top + f * 0.1), f * 0.3, Paint::Fill(palette.accent))?;
        }
    }
    Ok(())
}

/// Band across the top edge whose lower edge is a single bezier wave.
/// `right`, `c1`, `c2` and `left` are fractions of the band height.
fn header_wave(w: f32, h: f32, right: f32, c1: f32, c2: f32, left: f32) -> Vec<PathSegment> {
    vec![
        PathSegment::MoveTo(Point::new(0.0, 0.0)),
        PathSegment::LineTo(Point::new(w, 0.0)),
        PathSegment::LineTo(Point::new(w, h * right)),
        PathSegment::CurveTo(
            Point::new(w * 0.7, h * c1),
            Point::new(w * 0.35, h * c2),
            Point::new(0.0, h * left),
        ),
        PathSegment::Close,
    ]
}

fn polygon(points: &[Point]) -> Vec<PathSegment> {
    let mut segments = Vec::with_capacity(points.len() + 1);
    for (i, p) in points.iter().enumerate() {
        segments.push(if i == 0 {
            PathSegment::MoveTo(*p)
        } else {
            PathSegment::LineTo(*p)
        });
    }
    segments.push(PathSegment::Close);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render_core::{DrawCommand, RecordingCanvas};
    use folio_types::{Size, Template};

    fn painted(variant: Variant) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new(Size::a4());
        let palette = Template::builtin_default().palette;
        let bands = Bands { header: 42.0, footer: 10.0 };
        paint(&mut canvas, variant, &palette, 210.0, 297.0, bands).unwrap();
        canvas
    }

    #[test]
    fn classic_paints_nothing() {
        assert!(painted(Variant::Classic).commands().is_empty());
    }

    #[test]
    fn decorations_never_draw_text() {
        for variant in Variant::ALL {
            assert!(painted(variant).texts().is_empty(), "{variant} drew text");
        }
    }

    #[test]
    fn panel_footer_covers_left_part() {
        let canvas = painted(Variant::Panel);
        let footer = canvas.commands().iter().find_map(|c| match c {
            DrawCommand::Rect { rect, .. } if rect.y > 200.0 => Some(*rect),
            _ => None,
        });
        let footer = footer.unwrap();
        assert!((footer.width - 210.0 * 0.42).abs() < 0.01);
        assert_eq!(footer.bottom(), 297.0);
    }

    #[test]
    fn stripes_alternate_colors() {
        let canvas = painted(Variant::Stripe);
        let palette = Template::builtin_default().palette;
        let fills: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, paint, .. } if rect.y == 0.0 => paint.fill_color(),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), 12);
        assert_eq!(fills[0], palette.primary);
        assert_eq!(fills[1], palette.secondary);
    }

    #[test]
    fn wave_uses_two_paths_per_band_and_circles() {
        let canvas = painted(Variant::Wave);
        let paths = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Path { .. }))
            .count();
        let circles = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(paths, 4);
        assert!(circles >= 2);
    }

    #[test]
    fn angled_header_overlaps_two_blocks() {
        let canvas = painted(Variant::Angled);
        let cmds = canvas.commands();
        assert!(matches!(cmds[0], DrawCommand::Triangle { .. }));
        assert!(matches!(cmds[1], DrawCommand::Path { .. }));
        assert!(matches!(cmds[2], DrawCommand::Path { .. }));
        assert_eq!(cmds.len(), 3);
    }
}
