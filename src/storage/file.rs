//! File-backed storage: one JSON object of string values

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use super::KeyValueStorage;
use crate::error::{AppError, AppResult};

type Entries = BTreeMap<String, String>;

/// Persistent key/value storage in a single JSON file.
///
/// The file is re-read on every access and rewritten through a temporary
/// sibling followed by a rename, so a crash never leaves a half-written file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> AppResult<Entries> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Entries::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AppError::StorageUnavailable(format!(
                    "Corrupt storage file {}: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(unavailable(&self.path, e)),
        }
    }

    fn write_entries(&self, entries: &Entries) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| unavailable(parent, e))?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| unavailable(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| unavailable(&self.path, e))
    }

    /// Read-modify-write under the file lock
    fn update(&self, apply: impl FnOnce(&mut Entries)) -> AppResult<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| AppError::StorageUnavailable("storage file lock poisoned".to_string()))?;

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Starting a fresh storage file: {}", e);
                Entries::new()
            }
        };
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

fn unavailable(path: &Path, e: io::Error) -> AppError {
    AppError::StorageUnavailable(format!("{}: {}", path.display(), e))
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_a_new_instance() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("theme").unwrap(), None);
        storage.set("theme", "dark").unwrap();
        storage.set("readBooks", "[\"b1\"]").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("readBooks").unwrap().as_deref(), Some("[\"b1\"]"));

        reopened.remove("theme").unwrap();
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_unavailable_for_reads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get("theme"),
            Err(AppError::StorageUnavailable(_))
        ));

        // A write replaces the corrupt content
        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_unwritable_location_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let storage = FileStorage::new(blocker.join("prefs.json"));
        assert!(matches!(
            storage.set("theme", "dark"),
            Err(AppError::StorageUnavailable(_))
        ));
    }
}
