pub mod fixtures;
pub mod pdf_assertions;

use folio::{
    DocumentComposer, DocumentRecord, FolioError, RecordingCanvas, RenderConfig,
    RenderStats, RendererBuilder, Template,
};
use folio_types::Size;
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render through the public renderer and reload the PDF.
pub fn render_pdf(
    record: &DocumentRecord,
    template: Option<&str>,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let renderer = RendererBuilder::new().build()?;
    let document = renderer.render_pdf(record, &fixtures::issuer(), template)?;
    GeneratedPdf::from_bytes(document.to_bytes()?)
}

/// Compose straight onto a recording canvas.
pub fn compose_recorded(
    canvas: RecordingCanvas,
    record: &DocumentRecord,
    template: &Template,
    config: &RenderConfig,
) -> Result<(RecordingCanvas, RenderStats), FolioError> {
    let mut canvas = canvas;
    let stats = DocumentComposer::new(config).compose(
        &mut canvas,
        record,
        template,
        &fixtures::issuer(),
    )?;
    Ok((canvas, stats))
}

pub fn a4_recorder() -> RecordingCanvas {
    RecordingCanvas::new(Size::a4())
}
