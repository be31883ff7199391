use crate::composer::RenderStats;
use crate::error::FolioError;
use folio_render_core::Canvas;
use folio_types::{DocumentKind, DocumentRecord};
use std::path::Path;

/// A rendered document: the drawn canvas plus what the composer reported.
#[derive(Debug)]
pub struct Document<C> {
    canvas: C,
    stats: RenderStats,
}

impl<C: Canvas> Document<C> {
    pub(crate) fn new(canvas: C, stats: RenderStats) -> Self {
        Self { canvas, stats }
    }

    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Serialize through the canvas backend.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FolioError> {
        Ok(self.canvas.output()?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FolioError> {
        let path = path.as_ref();
        self.canvas.save(path)?;
        log::info!("Saved {} page(s) to {}", self.page_count(), path.display());
        Ok(())
    }
}

/// File name for a record, e.g. `invoice-inv-2024-001.pdf`.
pub fn suggested_filename(record: &DocumentRecord) -> String {
    let kind = match record.kind {
        DocumentKind::Invoice => "invoice",
        DocumentKind::Receipt => "receipt",
    };
    let stem = match record.number.as_deref().map(str::trim) {
        Some(number) if !number.is_empty() => slug::slugify(format!("{} {}", kind, number)),
        _ => kind.to_string(),
    };
    format!("{}.pdf", stem)
}
