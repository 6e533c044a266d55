// src/cache.rs
//
// Explicit load cache: path → (modification time, loaded DataSet).
//
// An entry is served only while the file's mtime matches the one seen at
// load time. Failed loads are never cached. Callers own the cache and
// decide when to invalidate; nothing here is global.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::data::DataSet;
use crate::loader::{self, LoadError};

#[derive(Clone, Debug)]
struct CacheEntry {
    modified: Option<SystemTime>,
    data: Arc<DataSet>,
}

#[derive(Debug)]
pub struct LoadCache {
    placeholder: String,
    entries: HashMap<PathBuf, CacheEntry>,
}

impl LoadCache {
    pub fn new(placeholder: &str) -> Self {
        Self { placeholder: s!(placeholder), entries: HashMap::new() }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Serve `path` from cache if unchanged on disk, else (re)load it.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<DataSet>, LoadError> {
        let modified = match fs::metadata(path) {
            Ok(meta) => meta.modified().ok(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.entries.remove(path);
                return Err(LoadError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(LoadError::Io { path: path.to_path_buf(), source: e }),
        };

        if let Some(entry) = self.entries.get(path) {
            // No mtime support on this platform → always reload.
            if modified.is_some() && entry.modified == modified {
                logd!("Cache: hit {}", path.display());
                return Ok(Arc::clone(&entry.data));
            }
            logd!("Cache: stale {}, reloading", path.display());
        }

        let data = Arc::new(loader::load_table(path, &self.placeholder)?);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry { modified, data: Arc::clone(&data) },
        );
        Ok(data)
    }

    /// Drop one entry; the next `get_or_load` reads the file again.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        let removed = self.entries.remove(path).is_some();
        if removed {
            logd!("Cache: invalidated {}", path.display());
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
