//! Query engine: tokenize, score, rank, and diversify
//!
//! For each query token `w`:
//! - every id in the posting list of `w` gains [`EXACT_MATCH_WEIGHT`]
//! - every vocabulary token `k` with `k.starts_with(w)` or `w.starts_with(k)`
//!   gives each of its ids [`PARTIAL_MATCH_WEIGHT`], once per `k`
//!
//! `k == w` satisfies the partial rule too, so an exact hit scores 15.
//! Scores add up across query tokens and matching vocabulary tokens.
//!
//! Ranked candidates are then walked in order, keeping at most
//! `max_per_category` of each entry type, until `max_results` are kept.

use crate::index::PostingList;
use crate::indexer::SearchIndex;
use crate::normalize::query_tokens;
use quickfind_core::{Entry, EntryType};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Score added to ids whose token equals a query token
pub const EXACT_MATCH_WEIGHT: u32 = 10;

/// Score added to ids whose token is a prefix of, or prefixed by, a query token
pub const PARTIAL_MATCH_WEIGHT: u32 = 5;

/// A search result with its accumulated score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// The matched entry
    pub entry: Entry,
    /// Accumulated score
    pub score: u32,
}

impl SearchIndex {
    /// Search with explicit limits
    ///
    /// Returns at most `max_results` entries and at most `max_per_category`
    /// of any one type, best score first. An empty or blank query returns
    /// nothing.
    pub fn search(&self, query: &str, max_results: usize, max_per_category: usize) -> Vec<Entry> {
        self.search_scored(query, max_results, max_per_category)
            .into_iter()
            .map(|hit| hit.entry)
            .collect()
    }

    /// Search using the configured default limits
    pub fn search_with_defaults(&self, query: &str) -> Vec<Entry> {
        self.search(
            query,
            self.config.max_results,
            self.config.max_per_category,
        )
    }

    /// Search, keeping each hit's score
    ///
    /// Ties are ordered by ascending entry id.
    pub fn search_scored(
        &self,
        query: &str,
        max_results: usize,
        max_per_category: usize,
    ) -> Vec<SearchHit> {
        if max_results == 0 || max_per_category == 0 {
            return Vec::new();
        }

        let terms = query_tokens(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let scores = self.score_candidates(&terms);

        // Ids missing from the store would break the invariants; skip them.
        let mut ranked: Vec<(&Entry, u32)> = scores
            .into_iter()
            .filter_map(|(id, score)| self.entries.get(id).map(|entry| (entry, score)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.id.cmp(&b.0.id)));

        select_diverse(ranked, max_results, max_per_category)
    }

    /// Accumulate per-id scores for the query tokens
    fn score_candidates<'a>(&'a self, terms: &'a [String]) -> FxHashMap<&'a str, u32> {
        let mut scores: FxHashMap<&'a str, u32> = FxHashMap::default();

        for term in terms {
            if let Some(list) = self.postings.lookup(term) {
                credit(&mut scores, list, EXACT_MATCH_WEIGHT);
            }

            let extensions = self.postings.with_prefix(term);
            let prefixes = self.postings.prefixes_of(term);
            for (_, list) in extensions.chain(prefixes) {
                credit(&mut scores, list, PARTIAL_MATCH_WEIGHT);
            }
        }

        scores
    }
}

fn credit<'a>(scores: &mut FxHashMap<&'a str, u32>, list: &'a PostingList, weight: u32) {
    for id in list.iter() {
        *scores.entry(id).or_insert(0) += weight;
    }
}

/// Walk ranked candidates applying the per-type cap and the result cap
fn select_diverse(
    ranked: Vec<(&Entry, u32)>,
    max_results: usize,
    max_per_category: usize,
) -> Vec<SearchHit> {
    let mut per_type: FxHashMap<EntryType, usize> = FxHashMap::default();
    let mut hits = Vec::with_capacity(max_results.min(ranked.len()));

    for (entry, score) in ranked {
        if hits.len() >= max_results {
            break;
        }
        let count = per_type.entry(entry.entry_type).or_insert(0);
        if *count >= max_per_category {
            continue;
        }
        *count += 1;
        hits.push(SearchHit {
            entry: entry.clone(),
            score,
        });
    }

    hits
}

// ============================================================================
// Tests
// ============================================================================
