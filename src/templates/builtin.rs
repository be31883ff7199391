//! The built-in template registry.
//!
//! Initialized once on first use and never mutated afterwards. User templates
//! live in a [`TemplateRepository`](folio_traits::TemplateRepository) and are
//! layered on top by [`LayeredCatalog`](super::LayeredCatalog).

use folio_types::{FontSet, LayoutFlags, Palette, Rgb, Template, TemplateId};
use once_cell::sync::Lazy;

struct Spec {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    colors: [[u8; 3]; 4],
    fonts: [&'static str; 3],
    /// show_logo, show_watermark, show_header_border, show_footer
    flags: [bool; 4],
    premium: bool,
}

const SPECS: &[Spec] = &[
    Spec {
        id: "classic",
        name: "Classic",
        category: "standard",
        colors: [[30, 64, 175], [96, 165, 250], [14, 116, 144], [31, 41, 55]],
        fonts: ["helvetica", "helvetica", "helvetica"],
        flags: [false, false, true, true],
        premium: false,
    },
    Spec {
        id: "minimal",
        name: "Minimal",
        category: "standard",
        colors: [[17, 24, 39], [156, 163, 175], [75, 85, 99], [17, 24, 39]],
        fonts: ["helvetica", "helvetica", "helvetica"],
        flags: [false, false, false, true],
        premium: false,
    },
    Spec {
        id: "corporate",
        name: "Corporate",
        category: "business",
        colors: [[15, 23, 42], [59, 130, 246], [30, 64, 175], [30, 41, 59]],
        fonts: ["helvetica", "helvetica", "helvetica"],
        flags: [true, false, true, true],
        premium: false,
    },
    Spec {
        id: "executive",
        name: "Executive",
        category: "business",
        colors: [[55, 48, 163], [165, 180, 252], [79, 70, 229], [30, 27, 75]],
        fonts: ["times", "helvetica", "times"],
        flags: [true, false, true, true],
        premium: false,
    },
    Spec {
        id: "modern",
        name: "Modern",
        category: "modern",
        colors: [[5, 150, 105], [110, 231, 183], [4, 120, 87], [6, 78, 59]],
        fonts: ["helvetica", "helvetica", "helvetica"],
        flags: [false, false, true, true],
        premium: false,
    },
    Spec {
        id: "vivid",
        name: "Vivid",
        category: "modern",
        colors: [[219, 39, 119], [249, 168, 212], [190, 24, 93], [80, 7, 36]],
        fonts: ["helvetica", "helvetica", "helvetica"],
        flags: [false, true, true, true],
        premium: false,
    },
    Spec {
        id: "creative",
        name: "Creative",
        category: "creative",
        colors: [[234, 88, 12], [253, 186, 116], [194, 65, 12], [67, 20, 7]],
        fonts: ["helvetica", "helvetica", "courier"],
        flags: [true, false, true, true],
        premium: false,
    },
    Spec {
        id: "geometric",
        name: "Geometric",
        category: "creative",
        colors: [[13, 148, 136], [94, 234, 212], [15, 118, 110], [19, 78, 74]],
        fonts: ["helvetica", "helvetica", "helvetica"],
        flags: [false, false, true, true],
        premium: false,
    },
    Spec {
        id: "elegant",
        name: "Elegant",
        category: "premium",
        colors: [[88, 28, 135], [216, 180, 254], [126, 34, 206], [59, 7, 100]],
        fonts: ["times", "times", "times"],
        flags: [true, true, true, true],
        premium: true,
    },
    Spec {
        id: "aurora",
        name: "Aurora",
        category: "premium",
        colors: [[30, 58, 138], [45, 212, 191], [124, 58, 237], [30, 41, 59]],
        fonts: ["helvetica", "helvetica", "times"],
        flags: [true, false, true, true],
        premium: true,
    },
];

fn build(spec: &Spec) -> Template {
    let rgb = |[r, g, b]: [u8; 3]| Rgb::new(r, g, b);
    let [primary, secondary, accent, text] = spec.colors;
    let [title, body, accent_font] = spec.fonts;
    let [show_logo, show_watermark, show_header_border, show_footer] = spec.flags;
    Template {
        id: TemplateId::from(spec.id),
        name: spec.name.to_string(),
        category: spec.category.to_string(),
        palette: Palette {
            primary: rgb(primary),
            secondary: rgb(secondary),
            accent: rgb(accent),
            text: rgb(text),
        },
        fonts: FontSet {
            title: title.to_string(),
            body: body.to_string(),
            accent: accent_font.to_string(),
        },
        layout: LayoutFlags {
            show_logo,
            show_watermark,
            show_header_border,
            show_footer,
        },
        is_premium: spec.premium,
    }
}

static BUILTINS: Lazy<Vec<Template>> = Lazy::new(|| SPECS.iter().map(build).collect());

/// Every built-in template, in display order.
pub fn builtin_templates() -> &'static [Template] {
    &BUILTINS
}

pub fn builtin(id: &str) -> Option<&'static Template> {
    BUILTINS.iter().find(|t| t.id == id)
}
