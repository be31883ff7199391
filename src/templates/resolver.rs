use folio_traits::{PreferenceStore, TEMPLATE_PREFERENCE_KEY, TemplateCatalog};
use folio_types::Template;
use std::fmt;

/// Which link of the priority chain supplied the resolved template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    Explicit,
    RecordRef,
    Preference,
    CatalogDefault,
    BuiltinDefault,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TemplateSource::Explicit => "explicit id",
            TemplateSource::RecordRef => "record reference",
            TemplateSource::Preference => "stored preference",
            TemplateSource::CatalogDefault => "catalog default",
            TemplateSource::BuiltinDefault => "built-in default",
        };
        f.write_str(s)
    }
}

/// Resolve the template for a render. Never fails.
///
/// Candidates are tried in order: `explicit`, `record_ref`, `preference`,
/// then the catalog's default. The first id the catalog knows wins; misses
/// and blank ids are skipped. When nothing matches the hard-coded built-in
/// default is returned. Whatever is found is merged field by field over the
/// built-in default, so the result is always fully populated.
pub fn resolve<C: TemplateCatalog + ?Sized>(
    catalog: &C,
    explicit: Option<&str>,
    record_ref: Option<&str>,
    preference: Option<&str>,
) -> Template {
    resolve_traced(catalog, explicit, record_ref, preference).0
}

/// [`resolve`], also reporting which candidate won.
pub fn resolve_traced<C: TemplateCatalog + ?Sized>(
    catalog: &C,
    explicit: Option<&str>,
    record_ref: Option<&str>,
    preference: Option<&str>,
) -> (Template, TemplateSource) {
    let base = Template::builtin_default();
    let candidates = [
        (explicit, TemplateSource::Explicit),
        (record_ref, TemplateSource::RecordRef),
        (preference, TemplateSource::Preference),
    ];

    for (id, source) in candidates {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            continue;
        };
        match catalog.get_by_id(id) {
            Some(partial) => {
                log::debug!("Template '{}' resolved from {}", id, source);
                return (partial.merge_over(&base), source);
            }
            None => log::debug!("Template '{}' ({}) not in catalog, falling back", id, source),
        }
    }

    if let Some(partial) = catalog.get_default() {
        log::debug!("Template '{}' resolved from catalog default", partial.id);
        return (partial.merge_over(&base), TemplateSource::CatalogDefault);
    }

    log::debug!("No catalog template matched; using built-in default");
    (base, TemplateSource::BuiltinDefault)
}

/// The template id stored in `store`, if any. Read only.
pub fn preferred_template_id<S: PreferenceStore + ?Sized>(store: &S) -> Option<String> {
    store
        .get(TEMPLATE_PREFERENCE_KEY)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::InMemoryPreferenceStore;
    use folio_types::{PartialTemplate, Rgb, TemplateId};

    #[derive(Debug, Default)]
    struct Fixed {
        templates: Vec<PartialTemplate>,
        default: Option<PartialTemplate>,
    }

    impl TemplateCatalog for Fixed {
        fn get_by_id(&self, id: &str) -> Option<PartialTemplate> {
            self.templates.iter().find(|t| t.id == id).cloned()
        }
        fn get_default(&self) -> Option<PartialTemplate> {
            self.default.clone()
        }
        fn list(&self) -> Vec<PartialTemplate> {
            self.templates.clone()
        }
    }

    fn catalog() -> Fixed {
        let ids = ["a", "b", "c", "d"];
        Fixed {
            templates: ids.iter().map(|id| PartialTemplate::new(*id)).collect(),
            default: Some(PartialTemplate::new("d")),
        }
    }

    #[test]
    fn empty_catalog_yields_builtin_default() {
        let (t, source) = resolve_traced(&Fixed::default(), Some("x"), Some("y"), Some("z"));
        assert_eq!(t, Template::builtin_default());
        assert_eq!(source, TemplateSource::BuiltinDefault);
    }

    #[test]
    fn blank_ids_are_skipped() {
        let (t, source) = resolve_traced(&catalog(), Some("  "), None, Some("c"));
        assert_eq!(t.id, "c");
        assert_eq!(source, TemplateSource::Preference);
    }

    #[test]
    fn partial_palette_is_filled_from_default() {
        let mut partial = PartialTemplate::new("brand");
        partial.palette.primary = Some(Rgb::new(200, 0, 0));
        partial.fonts.title = Some("times".into());
        let cat = Fixed {
            templates: vec![partial],
            default: None,
        };
        let t = resolve(&cat, Some("brand"), None, None);
        let base = Template::builtin_default();
        assert_eq!(t.id, TemplateId::from("brand"));
        assert_eq!(t.palette.primary, Rgb::new(200, 0, 0));
        assert_eq!(t.palette.secondary, base.palette.secondary);
        assert_eq!(t.fonts.title, "times");
        assert_eq!(t.fonts.body, base.fonts.body);
        assert_eq!(t.layout, base.layout);
    }

    #[test]
    fn preference_is_read_from_store() {
        let store = InMemoryPreferenceStore::with(TEMPLATE_PREFERENCE_KEY, " modern ");
        assert_eq!(preferred_template_id(&store).as_deref(), Some("modern"));
        assert_eq!(preferred_template_id(&InMemoryPreferenceStore::new()), None);
    }

    #[test]
    fn no_candidates_uses_catalog_default() {
        let catalog: &dyn TemplateCatalog = &catalog();
        assert_eq!(resolve(catalog, None, None, None).id, "d");
    }
}
