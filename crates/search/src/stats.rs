//! Index statistics for diagnostics

use quickfind_core::EntryType;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of index structure sizes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Live entries in the entry store
    pub total_entries: usize,
    /// Distinct tokens in the inverted index
    pub total_keywords: usize,
    /// Live entries per type (types with no entries are absent)
    pub entries_by_type: BTreeMap<EntryType, usize>,
}
