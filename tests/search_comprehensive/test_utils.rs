//! Test utilities for the comprehensive search tests

#![allow(dead_code)]

use quickfind::{Entry, EntryType, SearchIndex};
use std::collections::BTreeSet;

/// Build an entry with a title equal to its id
pub fn entry(id: &str, entry_type: EntryType, keywords: &[&str]) -> Entry {
    Entry::new(id, entry_type)
        .with_title(id)
        .with_route(format!("/{}/{}", entry_type, id))
        .with_keywords(keywords.iter().copied())
}

/// Small mixed catalog used across tiers
pub fn populate_catalog(index: &mut SearchIndex) {
    index.upsert(entry("p1", EntryType::Product, &["Pompe hydraulique", "PMP-001"]));
    index.upsert(entry("p2", EntryType::Product, &["Pompe électrique", "PMP-002"]));
    index.upsert(entry("c1", EntryType::Client, &["Société Dupont", "CLI-001", "Lyon"]));
    index.upsert(entry("s1", EntryType::Supplier, &["Hydro Fournitures", "FRN-001"]));
    index.upsert(entry(
        "i1",
        EntryType::SaleInvoice,
        &["FAC-2024-0001", "Société Dupont", "15/03/2024"],
    ));
    index.upsert(entry("o1", EntryType::Order, &["BC-2024-0001", "Société Dupont"]));
}

/// Result ids in order
pub fn ids(results: &[Entry]) -> Vec<String> {
    results.iter().map(|e| e.id.clone()).collect()
}

/// Check the three structures agree with each other
///
/// - every token of a live entry maps back to it
/// - every posting refers to a live entry that produced the token
/// - the partition matches the live entries' types
pub fn assert_consistent(index: &SearchIndex) {
    let store = index.entry_store();
    let postings = index.inverted_index();

    for entry in store.iter() {
        for token in store.tokens_of(&entry.id).unwrap() {
            let list = postings
                .lookup(token)
                .unwrap_or_else(|| panic!("token {:?} of {} not indexed", token, entry.id));
            assert!(list.contains(&entry.id));
        }
    }

    for token in postings.terms() {
        let list = postings.lookup(token).unwrap();
        assert!(!list.is_empty(), "empty posting list for {:?}", token);
        for id in list.iter() {
            let tokens: BTreeSet<&str> = store
                .tokens_of(id)
                .unwrap_or_else(|| panic!("posting {:?} -> unknown id {}", token, id))
                .collect();
            assert!(tokens.contains(token));
        }
    }

    let stats = index.stats();
    assert_eq!(stats.total_entries, store.len());
    for entry_type in EntryType::ALL {
        let expected: BTreeSet<&str> = store
            .iter()
            .filter(|e| e.entry_type == entry_type)
            .map(|e| e.id.as_str())
            .collect();
        let actual: BTreeSet<&str> = index.ids_of_type(entry_type).collect();
        assert_eq!(actual, expected, "partition mismatch for {}", entry_type);
        assert_eq!(
            stats.entries_by_type.get(&entry_type).copied().unwrap_or(0),
            expected.len()
        );
    }
}
