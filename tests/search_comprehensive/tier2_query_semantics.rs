//! Tier 2: Query Semantics
//!
//! Scoring weights, ranking order, accent-insensitivity and both caps.

use crate::test_utils::*;
use quickfind::{EntryType, SearchIndex, EXACT_MATCH_WEIGHT, PARTIAL_MATCH_WEIGHT};

#[test]
fn test_tier2_empty_and_blank_queries() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    assert!(index.search("", 50, 10).is_empty());
    assert!(index.search("   ", 50, 10).is_empty());
    assert!(index.search("\t\n", 50, 10).is_empty());
}

#[test]
fn test_tier2_pompe_returns_both_pumps_tied() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    let hits = index.search_scored("pompe", 50, 10);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].score, hits[1].score);
    assert!(hits.iter().all(|h| h.entry.entry_type == EntryType::Product));
}

#[test]
fn test_tier2_reference_is_selective() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    assert_eq!(ids(&index.search("PMP-001", 50, 10)), vec!["p1"]);
}

#[test]
fn test_tier2_exact_hit_scores_both_weights() {
    let mut index = SearchIndex::new();
    index.upsert(entry("s1", EntryType::Supplier, &["FRN-001"]));

    let hits = index.search_scored("frn-001", 10, 10);
    assert_eq!(hits[0].score, EXACT_MATCH_WEIGHT + PARTIAL_MATCH_WEIGHT);
}

#[test]
fn test_tier2_prefix_typing_finds_entry() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    // As the user types "hydr" both the pump and the supplier match
    let mut found = ids(&index.search("hydr", 50, 10));
    found.sort();
    assert_eq!(found, vec!["p1", "s1"]);
}

#[test]
fn test_tier2_multi_word_query_prefers_entry_matching_all() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    let results = index.search("dupont fac-2024-0001", 50, 10);
    assert_eq!(results[0].id, "i1");
    assert_eq!(results.len(), 3);
}

#[test]
fn test_tier2_date_keyword() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    assert_eq!(ids(&index.search("15/03/2024", 50, 10)), vec!["i1"]);
}

#[test]
fn test_tier2_accent_insensitive() {
    let mut index = SearchIndex::new();
    index.upsert(entry("x", EntryType::Product, &["Électrique"]));
    index.upsert(entry("y", EntryType::Product, &["electrique"]));

    assert_eq!(ids(&index.search("electrique", 10, 10)), vec!["x", "y"]);
    assert_eq!(ids(&index.search("Électrique", 10, 10)), vec!["x", "y"]);
}

#[test]
fn test_tier2_fifteen_clients_capped_at_ten() {
    let mut index = SearchIndex::new();
    for i in 0..15 {
        index.upsert(entry(&format!("c{:02}", i), EntryType::Client, &["societe"]));
    }

    let results = index.search("societe", 50, 10);
    assert_eq!(results.len(), 10);
    assert!(results.iter().all(|e| e.entry_type == EntryType::Client));
}

#[test]
fn test_tier2_category_cap_skips_to_next_type() {
    let mut index = SearchIndex::new();
    // Clients score higher (exact) than the products (prefix only)
    for i in 0..5 {
        index.upsert(entry(&format!("c{}", i), EntryType::Client, &["acme"]));
        index.upsert(entry(&format!("p{}", i), EntryType::Product, &["acmeline"]));
    }

    let results = index.search("acme", 4, 2);
    assert_eq!(ids(&results), vec!["c0", "c1", "p0", "p1"]);
}

#[test]
fn test_tier2_result_cap() {
    let mut index = SearchIndex::new();
    for t in EntryType::ALL {
        for i in 0..4 {
            index.upsert(entry(&t.entry_id(&i.to_string()), t, &["commun"]));
        }
    }

    for max in [1, 5, 13, 24, 100] {
        let results = index.search("commun", max, 10);
        assert_eq!(results.len(), max.min(24));
    }
}

#[test]
fn test_tier2_repeated_query_is_stable() {
    let mut index = SearchIndex::new();
    populate_catalog(&mut index);

    let first = index.search_scored("societe dupont", 50, 10);
    for _ in 0..10 {
        assert_eq!(index.search_scored("societe dupont", 50, 10), first);
    }
}
