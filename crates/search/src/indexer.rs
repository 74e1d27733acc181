//! The search index aggregate and its maintenance operations
//!
//! `SearchIndex` owns the three structures (entry store, type partition,
//! inverted index) and is the only code that mutates them. Every public
//! operation leaves them mutually consistent:
//!
//! - at most one live entry per id
//! - a token is indexed iff some live entry produced it
//! - the partition set of a type equals the live ids of that type
//!
//! Indexing never fails from the caller's point of view: a malformed entry is
//! logged and skipped so that bulk loops keep going.

use crate::index::InvertedIndex;
use crate::normalize::keyword_tokens;
use crate::partition::TypePartition;
use crate::stats::IndexStats;
use crate::store::{EntryStore, StoredEntry};
use quickfind_core::{Entry, EntryType, Result, SearchConfig};
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// In-memory multi-entity search index
///
/// Single-threaded: mutation takes `&mut self`. Wrap it in
/// [`SharedSearchIndex`](crate::SharedSearchIndex) to share across threads.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    pub(crate) config: SearchConfig,
    pub(crate) entries: EntryStore,
    pub(crate) types: TypePartition,
    pub(crate) postings: InvertedIndex,
}

impl SearchIndex {
    /// Create an empty index with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with the given configuration
    pub fn with_config(config: SearchConfig) -> Self {
        SearchIndex {
            config,
            ..Self::default()
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Insert or replace an entry
    ///
    /// A malformed entry (blank id) is a no-op and emits a warning.
    pub fn upsert(&mut self, entry: Entry) {
        let id = entry.id.clone();
        let entry_type = entry.entry_type;
        if let Err(e) = self.try_upsert(entry) {
            warn!(id = %id, entry_type = %entry_type, error = %e, "Skipping malformed search entry");
        }
    }

    /// Insert or replace an entry, reporting validation failures
    ///
    /// Any live entry with the same id is fully retracted first.
    pub fn try_upsert(&mut self, entry: Entry) -> Result<()> {
        entry.validate()?;

        self.remove(&entry.id);

        let split = self.config.split_keywords;
        let tokens: BTreeSet<String> = entry
            .keywords
            .iter()
            .flat_map(|k| keyword_tokens(k, split))
            .collect();

        for token in &tokens {
            self.postings.insert(token, &entry.id);
        }
        self.types.insert(entry.entry_type, &entry.id);

        trace!(id = %entry.id, entry_type = %entry.entry_type, tokens = tokens.len(), "Indexed entry");
        self.entries.insert(StoredEntry { entry, tokens });
        Ok(())
    }

    /// Remove an entry and every posting it contributed
    ///
    /// Returns the removed entry, or None if the id was unknown.
    pub fn remove(&mut self, id: &str) -> Option<Entry> {
        let stored = self.entries.remove(id)?;
        for token in &stored.tokens {
            self.postings.remove(token, id);
        }
        self.types.remove(stored.entry.entry_type, id);

        trace!(id = %id, "Removed entry");
        Some(stored.entry)
    }

    /// Remove every entry of one type
    ///
    /// Returns the number of entries removed.
    pub fn remove_type(&mut self, entry_type: EntryType) -> usize {
        let ids: Vec<String> = self.types.ids(entry_type).map(String::from).collect();
        let removed = ids.iter().filter(|id| self.remove(id).is_some()).count();
        debug!(entry_type = %entry_type, removed, "Removed entries of type");
        removed
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.entries.clear();
        self.types.clear();
        self.postings.clear();
        debug!("Cleared search index");
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Look up a live entry
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Check whether an id is live
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains(id)
    }

    /// Ids of live entries of one type, ascending
    pub fn ids_of_type(&self, entry_type: EntryType) -> impl Iterator<Item = &str> {
        self.types.ids(entry_type)
    }

    /// Read-only view of the inverted index
    pub fn inverted_index(&self) -> &InvertedIndex {
        &self.postings
    }

    /// Read-only view of the entry store
    pub fn entry_store(&self) -> &EntryStore {
        &self.entries
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current structure sizes
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_entries: self.entries.len(),
            total_keywords: self.postings.len(),
            entries_by_type: self.types.counts(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
