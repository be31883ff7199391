use crate::composer::DocumentComposer;
use crate::config::RenderConfig;
use crate::document::Document;
use crate::error::FolioError;
use crate::templates::{LayeredCatalog, TemplateSource, preferred_template_id, resolve_traced};
use folio_render_core::Canvas;
use folio_render_lopdf::PdfCanvas;
use folio_traits::{PreferenceStore, TemplateCatalog};
use folio_types::{DocumentRecord, IssuerInfo, Template};
use std::sync::Arc;

/// Resolves a template for each record and composes it onto a canvas.
///
/// Holds no per-render state, so one renderer can be shared across threads.
/// Build one with [`RendererBuilder`](crate::RendererBuilder).
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    catalog: LayeredCatalog,
    preferences: Option<Arc<dyn PreferenceStore>>,
    config: RenderConfig,
}

impl DocumentRenderer {
    pub(crate) fn new(
        catalog: LayeredCatalog,
        preferences: Option<Arc<dyn PreferenceStore>>,
        config: RenderConfig,
    ) -> Self {
        Self {
            catalog,
            preferences,
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LayeredCatalog {
        &self.catalog
    }

    /// Every template a caller may pick from, built-ins first.
    pub fn templates(&self) -> Vec<Template> {
        let base = Template::builtin_default();
        self.catalog
            .list()
            .into_iter()
            .map(|p| p.merge_over(&base))
            .collect()
    }

    /// The template `record` would be drawn with, and where it came from.
    pub fn resolve_template(
        &self,
        record: &DocumentRecord,
        explicit: Option<&str>,
    ) -> (Template, TemplateSource) {
        let preference = self
            .preferences
            .as_deref()
            .and_then(preferred_template_id);
        resolve_traced(
            &self.catalog,
            explicit,
            record.template_id.as_deref(),
            preference.as_deref(),
        )
    }

    /// Draw `record` onto `canvas`, which must be on its first, empty page.
    pub fn render<C: Canvas>(
        &self,
        mut canvas: C,
        record: &DocumentRecord,
        issuer: &IssuerInfo,
        explicit: Option<&str>,
    ) -> Result<Document<C>, FolioError> {
        let (template, source) = self.resolve_template(record, explicit);
        log::debug!("Using template '{}' from {}", template.id, source);
        let stats = DocumentComposer::new(&self.config).compose(&mut canvas, record, &template, issuer)?;
        Ok(Document::new(canvas, stats))
    }

    /// Render to a fresh PDF canvas sized from the layout config.
    pub fn render_pdf(
        &self,
        record: &DocumentRecord,
        issuer: &IssuerInfo,
        explicit: Option<&str>,
    ) -> Result<Document<PdfCanvas>, FolioError> {
        let title = format!(
            "{} {}",
            self.config.labels.title(record.kind),
            record.number.as_deref().unwrap_or_default()
        );
        let canvas = PdfCanvas::new(self.config.layout.page_size()).with_title(title.trim());
        self.render(canvas, record, issuer, explicit)
    }

    /// Render many records for one issuer. Results keep the input order.
    #[cfg(feature = "rayon")]
    pub fn render_batch(
        &self,
        records: &[DocumentRecord],
        issuer: &IssuerInfo,
    ) -> Vec<Result<Document<PdfCanvas>, FolioError>> {
        use rayon::prelude::*;
        log::info!(
            "Rendering {} record(s) on {} thread(s)",
            records.len(),
            rayon::current_num_threads()
        );
        records
            .par_iter()
            .map(|record| self.render_pdf(record, issuer, None))
            .collect()
    }

    /// Render many records for one issuer. Results keep the input order.
    #[cfg(not(feature = "rayon"))]
    pub fn render_batch(
        &self,
        records: &[DocumentRecord],
        issuer: &IssuerInfo,
    ) -> Vec<Result<Document<PdfCanvas>, FolioError>> {
        log::info!("Rendering {} record(s) sequentially", records.len());
        records
            .iter()
            .map(|record| self.render_pdf(record, issuer, None))
            .collect()
    }
}
