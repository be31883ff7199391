use folio_traits::{PreferenceError, PreferenceStore};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Preferences kept in a flat JSON object on disk.
///
/// The file is read when the store is opened and rewritten in full on every
/// `set`. A missing file is an empty store.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FilePreferenceStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(source) if source.trim().is_empty() => BTreeMap::new(),
            Ok(source) => serde_json::from_str(&source)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let json = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, json).map_err(|e| PreferenceError::PersistFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self
            .values
            .write()
            .map_err(|_| PreferenceError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }
}
