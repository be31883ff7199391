//! # folio
//!
//! Invoice and receipt layout with interchangeable visual templates.
//!
//! A [`DocumentRecord`] is drawn onto any [`Canvas`] backend: the composer
//! measures and places each block, starts new pages when the line-item table
//! overflows, and paints the decorative header and footer bands that belong to
//! the template's [`Variant`]. The template itself is picked by a fixed
//! priority chain (explicit id, the record's saved id, the user's stored
//! preference, the catalog default, then a hard-coded built-in).
//!
//! ```ignore
//! use folio::{IssuerInfo, RendererBuilder};
//!
//! let renderer = RendererBuilder::new().build()?;
//! let document = renderer.render_pdf(&record, &IssuerInfo::new("Acme Ltd"), Some("modern"))?;
//! document.save("invoice.pdf")?;
//! ```

pub mod builder;
pub mod composer;
pub mod config;
pub mod document;
pub mod error;
pub mod money;
pub mod renderer;
pub mod templates;
pub mod variant;

pub use builder::RendererBuilder;
pub use composer::{DocumentComposer, Phase, RenderStats};
pub use config::{Labels, RenderConfig};
pub use document::{Document, suggested_filename};
pub use error::FolioError;
pub use money::{format_money, format_quantity};
pub use renderer::DocumentRenderer;
pub use templates::{LayeredCatalog, TemplateSource, resolve};
pub use variant::{Variant, variant_for};

pub use folio_layout::{LayoutConfig, TextMeasurer};
pub use folio_render_core::{BoxStrategy, Canvas, CanvasError, RecordingCanvas};
pub use folio_render_lopdf::PdfCanvas;
pub use folio_resource::{DirectoryTemplateRepository, FilePreferenceStore};
pub use folio_traits::{
    CatalogError, InMemoryPreferenceStore, InMemoryTemplateRepository, PreferenceError,
    PreferenceStore, TemplateCatalog, TemplateRepository,
};
pub use folio_types::{
    DocumentKind, DocumentRecord, IssuerInfo, LineItem, PartialTemplate, PartyInfo, PaymentInfo,
    Rgb, Template, TemplateId,
};
