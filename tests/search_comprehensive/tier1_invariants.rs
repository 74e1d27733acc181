//! Tier 1: Structural Invariants
//!
//! Entry store, type partition and inverted index stay mutually consistent
//! through upsert, re-upsert, remove, remove_type and clear.

use crate::test_utils::*;
use quickfind::{EntryType, IndexStats, SearchIndex};

#[test]
fn test_tier1_catalog_is_consistent() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);
    assert_consistent(&index);
    assert_eq!(index.stats().total_entries, 6);
}

#[test]
fn test_tier1_reupsert_leaves_no_stale_postings() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    index.upsert(entry("p1", EntryType::Product, &["Vanne papillon", "VAN-010"]));

    assert_consistent(&index);
    assert!(index.inverted_index().lookup("pmp-001").is_none());
    assert!(index.inverted_index().lookup("hydraulique").is_none());
    assert!(index.search("PMP-001", 50, 10).is_empty());
    assert_eq!(ids(&index.search("van-010", 50, 10)), vec!["p1"]);
}

#[test]
fn test_tier1_reupsert_with_new_type_moves_partition() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    index.upsert(entry("c1", EntryType::Supplier, &["Société Dupont"]));

    assert_consistent(&index);
    assert_eq!(index.ids_of_type(EntryType::Client).count(), 0);
    assert!(index.ids_of_type(EntryType::Supplier).any(|id| id == "c1"));
}

#[test]
fn test_tier1_remove_every_entry_empties_vocabulary() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    for id in ["p1", "p2", "c1", "s1", "i1", "o1"] {
        let before = index.stats().total_entries;
        assert!(index.remove(id).is_some());
        assert_eq!(index.stats().total_entries, before - 1);
        assert_consistent(&index);
    }

    assert_eq!(index.stats(), IndexStats::default());
}

#[test]
fn test_tier1_remove_unknown_changes_nothing() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);
    let before = index.stats();

    assert!(index.remove("zz").is_none());
    assert_eq!(index.stats(), before);
}

#[test]
fn test_tier1_remove_type_keeps_shared_tokens() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    // "société dupont" is shared by the client, the invoice and the order
    assert_eq!(index.remove_type(EntryType::Client), 1);

    assert_consistent(&index);
    let list = index.inverted_index().lookup("societe dupont").unwrap();
    assert_eq!(list.len(), 2);
    assert!(index.inverted_index().lookup("cli-001").is_none());
    assert!(index.inverted_index().lookup("lyon").is_none());
}

#[test]
fn test_tier1_malformed_entry_is_noop() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);
    let before = index.stats();

    index.upsert(entry("", EntryType::Product, &["fantome"]));
    index.upsert(entry(" \t", EntryType::Product, &["fantome"]));

    assert_eq!(index.stats(), before);
    assert!(index.search("fantome", 50, 10).is_empty());
}

#[test]
fn test_tier1_clear_then_reuse() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    index.clear();
    assert_eq!(index.stats(), IndexStats::default());
    assert!(index.search("pompe", 50, 10).is_empty());

    populate_catalog(&mut index);
    assert_consistent(&index);
    assert_eq!(index.search("pompe", 50, 10).len(), 2);
}
