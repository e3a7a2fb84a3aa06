//! The flat key → JSON document layer under every repository.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::StoreError;

/// A flat string key-value store holding one JSON document per key.
pub trait DocumentStore {
    /// Returns the raw document under `key`, `None` if never written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the document under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be written.
    fn save(&self, key: &str, document: &str) -> Result<(), StoreError>;

    /// Lists every key holding a document, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be listed.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Reads and deserializes a JSON array, treating a missing key as empty.
pub(crate) fn load_list<T, S>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: DocumentStore + ?Sized,
{
    match store.load(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Serde {
            key: key.to_owned(),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

pub(crate) fn save_list<T, S>(store: &S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: DocumentStore + ?Sized,
{
    let raw = serde_json::to_string(items).map_err(|source| StoreError::Serde {
        key: key.to_owned(),
        source,
    })?;
    store.save(key, &raw)
}

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the store directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        tracing::debug!(root = %root.display(), "opened document store");
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_key(key) {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl DocumentStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn save(&self, key: &str, document: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        // Write-then-rename so a crash never leaves a truncated document.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, document).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.root.clone(),
            source,
        };
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(io_err)? {
            let name = entry.map_err(io_err)?.file_name();
            // Leftover `.json.tmp` files and foreign files are not documents.
            if let Some(key) = name.to_str().and_then(|n| n.strip_suffix(".json")) {
                if is_valid_key(key) {
                    keys.push(key.to_owned());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// In-process store, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let documents = self
            .documents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(documents.get(key).cloned())
    }

    fn save(&self, key: &str, document: &str) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        documents.insert(key.to_owned(), document.to_owned());
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let documents = self
            .documents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut keys: Vec<String> = documents.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
