//! Template repository backed by a directory of JSON files.
//!
//! Each `*.json` file holds either one partial template or an array of them.
//! Files are read once, when the repository is opened; the repository is
//! read-only afterwards.

use folio_traits::{CatalogError, InMemoryTemplateRepository, TemplateRepository};
use folio_types::PartialTemplate;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct DirectoryTemplateRepository {
    base_path: PathBuf,
    loaded: InMemoryTemplateRepository,
}

impl DirectoryTemplateRepository {
    /// Loads every `*.json` file directly inside `base_path`.
    ///
    /// Files that fail to parse are skipped with a warning so one broken
    /// template cannot take the others down with it.
    pub fn open<P: AsRef<Path>>(base_path: P) -> Result<Self, CatalogError> {
        let base = base_path.as_ref().to_path_buf();
        let loaded = InMemoryTemplateRepository::new();

        let mut paths: Vec<PathBuf> = fs::read_dir(&base)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in paths {
            match read_templates(&path) {
                Ok(templates) => {
                    for t in templates {
                        log::debug!("Loaded user template '{}' from {}", t.id, path.display());
                        loaded.insert(t)?;
                    }
                }
                Err(e) => log::warn!("Skipping template file {}: {}", path.display(), e),
            }
        }

        Ok(Self {
            base_path: base,
            loaded,
        })
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

fn read_templates(path: &Path) -> Result<Vec<PartialTemplate>, CatalogError> {
    let source = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&source)?;
    let templates = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(templates)
}

impl TemplateRepository for DirectoryTemplateRepository {
    fn find(&self, id: &str) -> Option<PartialTemplate> {
        self.loaded.find(id)
    }

    fn all(&self) -> Vec<PartialTemplate> {
        self.loaded.all()
    }

    fn name(&self) -> &'static str {
        "DirectoryTemplateRepository"
    }
}
