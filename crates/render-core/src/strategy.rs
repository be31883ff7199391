use crate::canvas::{Canvas, Paint, Primitive};
use crate::error::CanvasError;
use folio_types::Rect;

/// How rounded boxes are drawn on a particular canvas.
///
/// Probed once per render and then reused for every box, so call sites never
/// test capabilities themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStrategy {
    RoundedRect,
    RoundRect,
    Plain,
}

impl BoxStrategy {
    pub fn probe<C: Canvas + ?Sized>(canvas: &C) -> Self {
        let strategy = if canvas.supports(Primitive::RoundedRect) {
            BoxStrategy::RoundedRect
        } else if canvas.supports(Primitive::RoundRect) {
            BoxStrategy::RoundRect
        } else {
            BoxStrategy::Plain
        };
        log::debug!("Rounded boxes drawn with {:?}", strategy);
        strategy
    }

    /// Draw a box with the probed primitive.
    ///
    /// A canvas that advertised a primitive but then reports it unsupported
    /// still gets a box: drawing continues down the chain to a plain rect.
    /// Any other canvas error is returned unchanged.
    pub fn draw<C: Canvas + ?Sized>(
        self,
        canvas: &mut C,
        rect: Rect,
        radius: f32,
        paint: Paint,
    ) -> Result<(), CanvasError> {
        if radius <= 0.0 {
            return canvas.rect(rect, paint);
        }
        if self == BoxStrategy::RoundedRect {
            match canvas.rounded_rect(rect, radius, paint) {
                Err(e) if e.is_unsupported() => log::debug!("{}, trying round_rect", e),
                other => return other,
            }
        }
        if matches!(self, BoxStrategy::RoundedRect | BoxStrategy::RoundRect) {
            match canvas.round_rect(rect, radius, paint) {
                Err(e) if e.is_unsupported() => log::debug!("{}, drawing a plain rect", e),
                other => return other,
            }
        }
        canvas.rect(rect, paint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingCanvas};
    use folio_types::{Rgb, Size};

    fn sample_box() -> Rect {
        Rect::new(10.0, 10.0, 50.0, 20.0)
    }

    #[test]
    fn probe_prefers_rounded_rect() {
        let canvas = RecordingCanvas::new(Size::a4());
        assert_eq!(BoxStrategy::probe(&canvas), BoxStrategy::RoundedRect);
    }

    #[test]
    fn probe_walks_the_fallback_chain() {
        let canvas = RecordingCanvas::new(Size::a4()).without(Primitive::RoundedRect);
        assert_eq!(BoxStrategy::probe(&canvas), BoxStrategy::RoundRect);

        let canvas = RecordingCanvas::new(Size::a4())
            .without(Primitive::RoundedRect)
            .without(Primitive::RoundRect);
        assert_eq!(BoxStrategy::probe(&canvas), BoxStrategy::Plain);
    }

    #[test]
    fn plain_strategy_draws_rect() {
        let mut canvas = RecordingCanvas::new(Size::a4())
            .without(Primitive::RoundedRect)
            .without(Primitive::RoundRect);
        let strategy = BoxStrategy::probe(&canvas);
        strategy
            .draw(&mut canvas, sample_box(), 2.0, Paint::Fill(Rgb::WHITE))
            .unwrap();
        assert!(matches!(canvas.commands()[0], DrawCommand::Rect { .. }));
    }

    #[test]
    fn misreported_capability_still_draws() {
        // Claims rounded_rect support without the primitive actually working.
        let mut canvas = RecordingCanvas::new(Size::a4()).failing(Primitive::RoundedRect);
        let strategy = BoxStrategy::probe(&canvas);
        assert_eq!(strategy, BoxStrategy::RoundedRect);
        strategy
            .draw(&mut canvas, sample_box(), 2.0, Paint::Fill(Rgb::WHITE))
            .unwrap();
        assert!(matches!(canvas.commands()[0], DrawCommand::RoundRect { .. }));
    }
}
