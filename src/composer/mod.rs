//! Lays a record out onto a canvas.
//!
//! The composer walks a fixed sequence of phases, keeping a [`RenderState`]
//! cursor that lives for exactly one call:
//!
//! Header → Watermark → InfoBar → PartyAndPaymentBoxes → Table → Totals →
//! Notes → Footer
//!
//! Every block is measured before it is drawn. The table, totals and notes
//! check the remaining height first and move to a new page when the block
//! would run into the footer reserve; the table header row is redrawn at the
//! top of each continuation page.

mod boxes;
mod footer;
mod header;
mod notes;
mod table;
mod totals;

pub use boxes::box_height;

use crate::config::RenderConfig;
use crate::variant::{Bands, Variant, paint_footer, variant_for};
use folio_layout::{LayoutConfig, RenderState, TextMeasurer, pt_to_mm};
use folio_render_core::{BoxStrategy, Canvas, CanvasError, TextStyle};
use folio_types::{DocumentRecord, FontSpec, IssuerInfo, Rgb, Template};
use std::fmt;

/// Writing phases, in order. `PageBreak` is a transition, not a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Header,
    Watermark,
    InfoBar,
    PartyAndPaymentBoxes,
    Table,
    Totals,
    Notes,
    Footer,
}

impl Phase {
    /// Phases allowed to start a new page.
    pub fn may_break(self) -> bool {
        matches!(self, Phase::Table | Phase::Totals | Phase::Notes)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What a render produced, for callers and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderStats {
    pub pages: usize,
    pub page_breaks: usize,
    pub table_header_rows: usize,
    pub item_rows: usize,
    /// Height shared by the party and payment boxes, in millimetres.
    pub party_box_height: f32,
    pub footer_drawn: bool,
    pub variant: Option<Variant>,
}

/// Stateless layout driver; one instance can serve any number of renders.
#[derive(Debug, Clone, Copy)]
pub struct DocumentComposer<'a> {
    config: &'a RenderConfig,
}

impl<'a> DocumentComposer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Draw `record` onto `canvas`, which must be positioned on its first,
    /// empty page.
    ///
    /// Only canvas failures are errors; they are returned unchanged and leave
    /// the canvas partially drawn.
    pub fn compose<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        record: &DocumentRecord,
        template: &Template,
        issuer: &IssuerInfo,
    ) -> Result<RenderStats, CanvasError> {
        let layout = &self.config.layout;
        let variant = variant_for(template.id.as_str(), template);
        let boxes = BoxStrategy::probe(canvas);
        let page = canvas.page_size();

        let mut frame = Frame {
            state: RenderState::new(page, layout.margin),
            canvas,
            config: self.config,
            layout,
            template,
            record,
            issuer,
            variant,
            boxes,
            currency: record.currency_or(&self.config.base_currency),
            phase: Phase::Header,
            table_fresh_page: false,
            stats: RenderStats {
                variant: Some(variant),
                ..RenderStats::default()
            },
        };

        frame.draw_header()?;
        frame.enter(Phase::Watermark);
        frame.draw_watermark()?;
        frame.enter(Phase::InfoBar);
        frame.draw_info_bar()?;
        frame.enter(Phase::PartyAndPaymentBoxes);
        frame.draw_boxes()?;
        frame.enter(Phase::Table);
        frame.draw_table()?;
        frame.enter(Phase::Totals);
        frame.draw_totals()?;
        frame.enter(Phase::Notes);
        frame.draw_notes()?;
        frame.enter(Phase::Footer);
        frame.draw_footer()?;

        let mut stats = frame.stats;
        stats.pages = frame.state.page_count();
        log::info!(
            "Rendered {:?} '{}' with template '{}' ({}): {} page(s), {} item row(s)",
            record.kind,
            record.number.as_deref().unwrap_or("-"),
            template.id,
            variant,
            stats.pages,
            stats.item_rows
        );
        Ok(stats)
    }
}

/// Per-render working set: the canvas, the cursor and resolved inputs.
pub(crate) struct Frame<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    state: RenderState,
    config: &'a RenderConfig,
    layout: &'a LayoutConfig,
    template: &'a Template,
    record: &'a DocumentRecord,
    issuer: &'a IssuerInfo,
    variant: Variant,
    boxes: BoxStrategy,
    currency: &'a str,
    phase: Phase,
    /// Set right after a table page break, cleared once a row is drawn.
    table_fresh_page: bool,
    stats: RenderStats,
}

impl<C: Canvas + ?Sized> Frame<'_, C> {
    fn enter(&mut self, phase: Phase) {
        log::trace!("{} -> {}", self.phase, phase);
        self.phase = phase;
    }

    /// Whether the template asks for a header band, which also turns on the
    /// variant's footer band.
    fn uses_band(&self) -> bool {
        self.template.layout.show_header_border
    }

    fn bands(&self) -> Bands {
        Bands::from_layout(self.layout)
    }

    /// Make room for a block of `height`. Starts a new page when the block
    /// would cross into the footer reserve, unless the cursor is already at
    /// the top of a page. Returns whether a break happened.
    fn ensure_space(&mut self, height: f32) -> Result<bool, CanvasError> {
        let analysis = self.state.analyze(height, self.layout.footer_reserve);
        if !analysis.should_break || self.state.at_page_top() {
            return Ok(false);
        }
        self.page_break()?;
        Ok(true)
    }

    fn page_break(&mut self) -> Result<(), CanvasError> {
        debug_assert!(self.phase.may_break(), "page break during {}", self.phase);
        self.canvas.add_page()?;
        self.state.next_page();
        self.stats.page_breaks += 1;
        log::debug!(
            "Page break during {} -> page {}",
            self.phase,
            self.state.page_count()
        );

        if self.uses_band() {
            let palette = self.template.palette;
            let bands = self.bands();
            paint_footer(
                &mut *self.canvas,
                self.variant,
                &palette,
                self.state.page_width,
                self.state.page_height,
                bands.footer,
            )?;
        }
        if self.phase == Phase::Table {
            self.draw_table_header()?;
            self.table_fresh_page = true;
        }
        Ok(())
    }

    fn wrap(&self, text: &str, width: f32, font: &FontSpec, size: f32) -> Vec<String> {
        TextMeasurer::new(&*self.canvas).wrap(text, width, font, size)
    }

    fn title_font(&self) -> FontSpec {
        FontSpec::new(self.template.fonts.title.as_str()).bold()
    }

    fn body_font(&self) -> FontSpec {
        FontSpec::new(self.template.fonts.body.as_str())
    }

    fn body_bold(&self) -> FontSpec {
        self.body_font().bold()
    }

    fn accent_font(&self) -> FontSpec {
        FontSpec::new(self.template.fonts.accent.as_str())
    }

    fn style(&self, font: FontSpec, size: f32, color: Rgb) -> TextStyle {
        TextStyle::new(font, size, color)
    }

    fn body_style(&self) -> TextStyle {
        self.style(self.body_font(), self.layout.body_size, self.template.palette.text)
    }

    fn heading_style(&self) -> TextStyle {
        self.style(
            self.body_bold(),
            self.layout.heading_size,
            self.template.palette.primary,
        )
    }
}

/// Baseline for a line of `size_pt` text centred in a slot of `slot` height
/// starting at `top`.
pub(crate) fn baseline(top: f32, slot: f32, size_pt: f32) -> f32 {
    top + (slot + pt_to_mm(size_pt) * 0.7) / 2.0
}
