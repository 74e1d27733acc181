//! Entry store: id → entry, plus the tokens each entry contributed
//!
//! Remembering the exact token set lets removal retract precisely the
//! postings an entry created, independent of tokenization settings.

use quickfind_core::Entry;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// An indexed entry with the tokens it put into the inverted index
#[derive(Debug, Clone)]
pub(crate) struct StoredEntry {
    pub(crate) entry: Entry,
    pub(crate) tokens: BTreeSet<String>,
}

/// Authoritative mapping from entry id to its record
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: FxHashMap<String, StoredEntry>,
}

impl EntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any entry with the same id
    pub(crate) fn insert(&mut self, stored: StoredEntry) -> Option<StoredEntry> {
        self.entries.insert(stored.entry.id.clone(), stored)
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<StoredEntry> {
        self.entries.remove(id)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id).map(|s| &s.entry)
    }

    /// Tokens contributed by an entry
    pub fn tokens_of(&self, id: &str) -> Option<impl Iterator<Item = &str>> {
        self.entries
            .get(id)
            .map(|s| s.tokens.iter().map(String::as_str))
    }

    /// Check whether an id is live
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate live entries (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values().map(|s| &s.entry)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
