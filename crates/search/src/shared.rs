//! Thread-safe handle to a search index
//!
//! Upsert and remove touch three structures that must stay consistent, so
//! the whole index sits behind one `RwLock`: every mutation holds the write
//! lock for its full duration, reads share the read lock and return owned
//! data.

use crate::indexer::SearchIndex;
use crate::query::SearchHit;
use crate::stats::IndexStats;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use quickfind_core::{Entry, EntryType, Result, SearchConfig};
use std::sync::Arc;

/// Cloneable, lock-protected [`SearchIndex`]
#[derive(Debug, Clone, Default)]
pub struct SharedSearchIndex {
    inner: Arc<RwLock<SearchIndex>>,
}

impl SharedSearchIndex {
    /// Wrap an existing index
    pub fn new(index: SearchIndex) -> Self {
        SharedSearchIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Create an empty shared index with the given configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Self::new(SearchIndex::with_config(config))
    }

    /// Hold the read lock, e.g. to run several reads on one snapshot
    pub fn read(&self) -> RwLockReadGuard<'_, SearchIndex> {
        self.inner.read()
    }

    /// Hold the write lock, e.g. to index a whole batch atomically
    pub fn write(&self) -> RwLockWriteGuard<'_, SearchIndex> {
        self.inner.write()
    }

    /// See [`SearchIndex::upsert`]
    pub fn upsert(&self, entry: Entry) {
        self.inner.write().upsert(entry);
    }

    /// See [`SearchIndex::try_upsert`]
    pub fn try_upsert(&self, entry: Entry) -> Result<()> {
        self.inner.write().try_upsert(entry)
    }

    /// See [`SearchIndex::remove`]
    pub fn remove(&self, id: &str) -> Option<Entry> {
        self.inner.write().remove(id)
    }

    /// See [`SearchIndex::remove_type`]
    pub fn remove_type(&self, entry_type: EntryType) -> usize {
        self.inner.write().remove_type(entry_type)
    }

    /// See [`SearchIndex::clear`]
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// See [`SearchIndex::search`]
    pub fn search(&self, query: &str, max_results: usize, max_per_category: usize) -> Vec<Entry> {
        self.inner.read().search(query, max_results, max_per_category)
    }

    /// See [`SearchIndex::search_with_defaults`]
    pub fn search_with_defaults(&self, query: &str) -> Vec<Entry> {
        self.inner.read().search_with_defaults(query)
    }

    /// See [`SearchIndex::search_scored`]
    pub fn search_scored(
        &self,
        query: &str,
        max_results: usize,
        max_per_category: usize,
    ) -> Vec<SearchHit> {
        self.inner
            .read()
            .search_scored(query, max_results, max_per_category)
    }

    /// See [`SearchIndex::get`]
    pub fn get(&self, id: &str) -> Option<Entry> {
        self.inner.read().get(id).cloned()
    }

    /// See [`SearchIndex::stats`]
    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
