//! Path-keyed cache of cleaned tables
//!
//! Entries are never invalidated automatically: a cached table stays valid
//! for the lifetime of the cache even if the file changes on disk. Use
//! [`LoadCache::invalidate`] or [`LoadCache::clear`] to force a re-read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::cleaner::{clean, CleanedTable, CleaningConfig};
use super::error::AnalysisError;
use super::loader::load_dataset;

type Slot = Arc<Mutex<Option<Arc<CleanedTable>>>>;

/// Thread-safe path → cleaned table store.
///
/// Each path gets its own slot. The first caller for a path computes the
/// table while holding the slot lock, so concurrent callers for the same
/// path wait and then reuse the result. Failed loads leave the slot empty
/// and the next caller retries.
#[derive(Debug, Default)]
pub struct LoadCache {
    slots: Mutex<HashMap<PathBuf, Slot>>,
}

impl LoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `path`, computing it with `load` if absent.
    pub fn get_or_try_insert_with<F>(
        &self,
        path: &Path,
        load: F,
    ) -> Result<Arc<CleanedTable>, AnalysisError>
    where
        F: FnOnce() -> Result<CleanedTable, AnalysisError>,
    {
        let slot = {
            let mut slots = lock(&self.slots);
            Arc::clone(slots.entry(path.to_path_buf()).or_default())
        };

        let mut entry = lock(&*slot);
        if let Some(table) = entry.as_ref() {
            log::debug!("Cache hit for {}", path.display());
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(load()?);
        *entry = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Cached table for `path`, if one has been computed
    pub fn get(&self, path: &Path) -> Option<Arc<CleanedTable>> {
        let slot = lock(&self.slots).get(path).cloned()?;
        let entry = lock(&*slot);
        entry.clone()
    }

    /// Forget the entry for `path`. Returns true if a table was cached.
    pub fn invalidate(&self, path: &Path) -> bool {
        lock(&self.slots)
            .remove(path)
            .is_some_and(|slot| lock(&*slot).is_some())
    }

    pub fn clear(&self) {
        lock(&self.slots).clear();
    }

    /// Number of populated entries
    pub fn len(&self) -> usize {
        lock(&self.slots)
            .values()
            .filter(|slot| lock(&***slot).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Parse and clean a file without caching.
pub fn load_and_clean(path: &Path, config: &CleaningConfig) -> Result<CleanedTable, AnalysisError> {
    let df = load_dataset(path, config.infer_schema_length)?;
    clean(&df, config).map_err(|e| AnalysisError::Parse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

/// Loader/cleaner with a memoising cache keyed by file path.
///
/// The cache is tied to this loader's configuration, so a different
/// configuration needs its own loader.
#[derive(Debug, Default)]
pub struct DatasetLoader {
    config: CleaningConfig,
    cache: LoadCache,
}

impl DatasetLoader {
    pub fn new(config: CleaningConfig) -> Self {
        Self {
            config,
            cache: LoadCache::new(),
        }
    }

    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    pub fn cache(&self) -> &LoadCache {
        &self.cache
    }

    /// Load and clean `path`, reusing a previous result for the same path.
    pub fn load(&self, path: &Path) -> Result<Arc<CleanedTable>, AnalysisError> {
        self.cache
            .get_or_try_insert_with(path, || load_and_clean(path, &self.config))
    }
}
