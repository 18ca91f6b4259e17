//! Process-lifetime, load-once cache for the row table.

use super::loader::load_rows;
use super::row::GameRow;
use crate::utils::error::DatasetError;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Lazily loaded, read-only row table for one dataset file
///
/// The file is read at most once per successful load. Concurrent first
/// callers wait on the loader instead of reading the file themselves.
/// A failed load leaves the cache empty so the next call retries.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    rows: OnceLock<Arc<[GameRow]>>,
    load_lock: Mutex<()>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rows: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    /// Build a cache that is already populated
    ///
    /// **Public** - lets callers serve rows that did not come from disk
    pub fn from_rows(path: impl Into<PathBuf>, rows: Vec<GameRow>) -> Self {
        let cache = Self::new(path);
        let _ = cache.rows.set(rows.into());
        cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.rows.get().is_some()
    }

    /// Get the row table, loading it on first access
    ///
    /// # Errors
    /// Propagates the loader's error; nothing is cached in that case.
    pub fn rows(&self) -> Result<Arc<[GameRow]>, DatasetError> {
        if let Some(rows) = self.rows.get() {
            return Ok(Arc::clone(rows));
        }

        // The guard protects no data, so a poisoned lock is still usable
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(rows) = self.rows.get() {
            debug!("Dataset loaded by a concurrent caller");
            return Ok(Arc::clone(rows));
        }

        let rows: Arc<[GameRow]> = load_rows(&self.path)?.into();
        let _ = self.rows.set(Arc::clone(&rows));

        Ok(rows)
    }
}
