pub mod color;
pub mod font;
pub mod geometry;
pub mod id;
pub mod record;
pub mod template;

pub use color::Rgb;
pub use font::{FontSpec, FontStyle, FontWeight};
pub use geometry::{Point, Rect, Size};
pub use id::TemplateId;
pub use record::{DocumentKind, DocumentRecord, IssuerInfo, LineItem, PartyInfo, PaymentInfo};
pub use template::{
    FontSet, LayoutFlags, Palette, PartialFontSet, PartialLayoutFlags, PartialPalette,
    PartialTemplate, Template,
};
