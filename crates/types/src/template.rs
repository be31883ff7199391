//! Visual templates: palette, fonts and layout flags.
//!
//! A [`Template`] is always fully populated. Catalog entries and user-made
//! templates are stored as [`PartialTemplate`]s and become a `Template` by
//! merging field by field over a fully-populated base.

use crate::color::Rgb;
use crate::id::TemplateId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub text: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub title: String,
    pub body: String,
    pub accent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFlags {
    pub show_logo: bool,
    pub show_watermark: bool,
    pub show_header_border: bool,
    pub show_footer: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub category: String,
    pub palette: Palette,
    pub fonts: FontSet,
    pub layout: LayoutFlags,
    pub is_premium: bool,
}

impl Template {
    pub const BUILTIN_DEFAULT_ID: &'static str = "classic";

    /// The hard-coded template every resolution ultimately falls back to, and
    /// the base every partial template is merged over.
    pub fn builtin_default() -> Self {
        Self {
            id: TemplateId::from(Self::BUILTIN_DEFAULT_ID),
            name: "Classic".to_string(),
            category: "standard".to_string(),
            palette: Palette {
                primary: Rgb::new(30, 64, 175),
                secondary: Rgb::new(96, 165, 250),
                accent: Rgb::new(14, 116, 144),
                text: Rgb::new(31, 41, 55),
            },
            fonts: FontSet {
                title: "helvetica".to_string(),
                body: "helvetica".to_string(),
                accent: "helvetica".to_string(),
            },
            layout: LayoutFlags {
                show_logo: false,
                show_watermark: false,
                show_header_border: true,
                show_footer: true,
            },
            is_premium: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialPalette {
    pub primary: Option<Rgb>,
    pub secondary: Option<Rgb>,
    pub accent: Option<Rgb>,
    pub text: Option<Rgb>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialFontSet {
    pub title: Option<String>,
    pub body: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialLayoutFlags {
    pub show_logo: Option<bool>,
    pub show_watermark: Option<bool>,
    pub show_header_border: Option<bool>,
    pub show_footer: Option<bool>,
}

/// A template override where everything but the id may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTemplate {
    pub id: TemplateId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub palette: PartialPalette,
    #[serde(default)]
    pub fonts: PartialFontSet,
    #[serde(default)]
    pub layout: PartialLayoutFlags,
    #[serde(default)]
    pub is_premium: Option<bool>,
}

impl PartialTemplate {
    pub fn new(id: impl Into<TemplateId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            category: None,
            palette: PartialPalette::default(),
            fonts: PartialFontSet::default(),
            layout: PartialLayoutFlags::default(),
            is_premium: None,
        }
    }

    /// Produce a fully-populated template, taking every missing field from
    /// `base`. The id always comes from the partial.
    pub fn merge_over(&self, base: &Template) -> Template {
        let p = &self.palette;
        let f = &self.fonts;
        let l = &self.layout;
        Template {
            id: self.id.clone(),
            name: self.name.clone().unwrap_or_else(|| self.id.to_string()),
            category: self.category.clone().unwrap_or_else(|| base.category.clone()),
            palette: Palette {
                primary: p.primary.unwrap_or(base.palette.primary),
                secondary: p.secondary.unwrap_or(base.palette.secondary),
                accent: p.accent.unwrap_or(base.palette.accent),
                text: p.text.unwrap_or(base.palette.text),
            },
            fonts: FontSet {
                title: non_blank(&f.title).unwrap_or_else(|| base.fonts.title.clone()),
                body: non_blank(&f.body).unwrap_or_else(|| base.fonts.body.clone()),
                accent: non_blank(&f.accent).unwrap_or_else(|| base.fonts.accent.clone()),
            },
            layout: LayoutFlags {
                show_logo: l.show_logo.unwrap_or(base.layout.show_logo),
                show_watermark: l.show_watermark.unwrap_or(base.layout.show_watermark),
                show_header_border: l
                    .show_header_border
                    .unwrap_or(base.layout.show_header_border),
                show_footer: l.show_footer.unwrap_or(base.layout.show_footer),
            },
            is_premium: self.is_premium.unwrap_or(base.is_premium),
        }
    }
}

impl From<Template> for PartialTemplate {
    fn from(t: Template) -> Self {
        Self {
            id: t.id,
            name: Some(t.name),
            category: Some(t.category),
            palette: PartialPalette {
                primary: Some(t.palette.primary),
                secondary: Some(t.palette.secondary),
                accent: Some(t.palette.accent),
                text: Some(t.palette.text),
            },
            fonts: PartialFontSet {
                title: Some(t.fonts.title),
                body: Some(t.fonts.body),
                accent: Some(t.fonts.accent),
            },
            layout: PartialLayoutFlags {
                show_logo: Some(t.layout.show_logo),
                show_watermark: Some(t.layout.show_watermark),
                show_header_border: Some(t.layout.show_header_border),
                show_footer: Some(t.layout.show_footer),
            },
            is_premium: Some(t.is_premium),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
