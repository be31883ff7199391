//! Decorative background variants.
//!
//! A variant decides only the shapes painted behind the header and footer.
//! Content placement never depends on it.

mod shapes;

pub use shapes::{Bands, paint, paint_footer, paint_header};

use folio_types::Template;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Classic,
    Panel,
    Stripe,
    Angled,
    Wave,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Classic,
        Variant::Panel,
        Variant::Stripe,
        Variant::Angled,
        Variant::Wave,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Panel => "panel",
            Variant::Stripe => "stripe",
            Variant::Angled => "angled",
            Variant::Wave => "wave",
        }
    }

    /// Whether the variant paints its own header band.
    pub fn paints_header_band(self) -> bool {
        self != Variant::Classic
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the variant for a template.
///
/// Built-in ids map explicitly. Any other id gets `Wave` when the template is
/// premium and `Classic` otherwise.
pub fn variant_for(template_id: &str, meta: &Template) -> Variant {
    match template_id {
        "classic" | "minimal" => Variant::Classic,
        "corporate" | "executive" => Variant::Panel,
        "modern" | "vivid" => Variant::Stripe,
        "creative" | "geometric" => Variant::Angled,
        "elegant" | "aurora" => Variant::Wave,
        _ if meta.is_premium => Variant::Wave,
        _ => Variant::Classic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::builtin_templates;

    #[test]
    fn every_builtin_has_a_variant() {
        for t in builtin_templates() {
            let v = variant_for(t.id.as_str(), t);
            assert!(Variant::ALL.contains(&v), "{} has no variant", t.id);
        }
    }

    #[test]
    fn builtins_cover_every_variant() {
        for variant in Variant::ALL {
            assert!(
                builtin_templates()
                    .iter()
                    .any(|t| variant_for(t.id.as_str(), t) == variant),
                "no built-in uses {variant}"
            );
        }
    }

    #[test]
    fn unknown_ids_fall_back_on_premium_flag() {
        let mut meta = Template::builtin_default();
        meta.is_premium = true;
        assert_eq!(variant_for("custom-123", &meta), Variant::Wave);
        meta.is_premium = false;
        assert_eq!(variant_for("custom-123", &meta), Variant::Classic);
    }

    #[test]
    fn mapping_ignores_premium_for_known_ids() {
        let mut meta = Template::builtin_default();
        meta.is_premium = true;
        assert_eq!(variant_for("corporate", &meta), Variant::Panel);
    }
}
