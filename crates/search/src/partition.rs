//! Type partition: entry type → ids of live entries of that type
//!
//! The set for a type always equals the live entries of that type; a set
//! that becomes empty is dropped.

use quickfind_core::EntryType;
use std::collections::{BTreeMap, BTreeSet};

/// Entry ids grouped by entry type
#[derive(Debug, Clone, Default)]
pub struct TypePartition {
    by_type: BTreeMap<EntryType, BTreeSet<String>>,
}

impl TypePartition {
    /// Create an empty partition
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, entry_type: EntryType, id: &str) {
        self.by_type
            .entry(entry_type)
            .or_default()
            .insert(id.to_string());
    }

    pub(crate) fn remove(&mut self, entry_type: EntryType, id: &str) -> bool {
        let Some(ids) = self.by_type.get_mut(&entry_type) else {
            return false;
        };
        let removed = ids.remove(id);
        if ids.is_empty() {
            self.by_type.remove(&entry_type);
        }
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.by_type.clear();
    }

    /// Ids of one type, in ascending order
    pub fn ids(&self, entry_type: EntryType) -> impl Iterator<Item = &str> {
        self.by_type
            .get(&entry_type)
            .into_iter()
            .flat_map(|ids| ids.iter().map(String::as_str))
    }

    /// Number of live entries of one type
    pub fn count(&self, entry_type: EntryType) -> usize {
        self.by_type.get(&entry_type).map_or(0, BTreeSet::len)
    }

    /// Counts for every type that has live entries
    pub fn counts(&self) -> BTreeMap<EntryType, usize> {
        self.by_type
            .iter()
            .map(|(t, ids)| (*t, ids.len()))
            .collect()
    }
}
