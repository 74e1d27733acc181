//! Inverted index: normalized token → posting list of entry ids
//!
//! This module provides:
//! - PostingList: set of entry ids sharing a token
//! - InvertedIndex: ordered vocabulary with prefix lookups
//!
//! # Invariant
//!
//! A token is a key if and only if its posting list is non-empty. Removing the
//! last id of a list deletes the token, so the vocabulary does not grow with
//! churn.
//!
//! Mutation is crate-private: only `SearchIndex` may change postings, which
//! keeps them consistent with the entry store and the type partition.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

// ============================================================================
// PostingList
// ============================================================================

/// Entry ids containing a token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    ids: BTreeSet<String>,
}

impl PostingList {
    /// Create a new empty posting list
    pub fn new() -> Self {
        PostingList {
            ids: BTreeSet::new(),
        }
    }

    /// Add an id. Returns false if it was already present.
    pub(crate) fn add(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Remove an id. Returns true if it was present.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Check whether an id is in the list
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Iterate ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of entries containing this token
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// ============================================================================
// InvertedIndex
// ============================================================================

/// Token → posting list mapping
///
/// Backed by a `BTreeMap` so that "tokens starting with w" is a range scan
/// rather than a pass over the whole vocabulary.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<String, PostingList>,
}

impl InvertedIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        InvertedIndex {
            postings: BTreeMap::new(),
        }
    }

    /// Add `id` to the posting list of `token`
    pub(crate) fn insert(&mut self, token: &str, id: &str) {
        match self.postings.get_mut(token) {
            Some(list) => {
                list.add(id);
            }
            None => {
                let mut list = PostingList::new();
                list.add(id);
                self.postings.insert(token.to_string(), list);
            }
        }
    }

    /// Remove `id` from the posting list of `token`
    ///
    /// Deletes the token when its list becomes empty.
    /// Returns true if the id was present.
    pub(crate) fn remove(&mut self, token: &str, id: &str) -> bool {
        let Some(list) = self.postings.get_mut(token) else {
            return false;
        };
        let removed = list.remove(id);
        if list.is_empty() {
            self.postings.remove(token);
        }
        removed
    }

    /// Drop every token
    pub(crate) fn clear(&mut self) {
        self.postings.clear();
    }

    /// Posting list for an exact token
    pub fn lookup(&self, token: &str) -> Option<&PostingList> {
        self.postings.get(token)
    }

    /// Tokens that start with `prefix`, `prefix` itself included
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a PostingList)> + 'a {
        self.postings
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(token, _)| token.starts_with(prefix))
            .map(|(token, list)| (token.as_str(), list))
    }

    /// Tokens that are proper prefixes of `token`
    pub fn prefixes_of<'a>(
        &'a self,
        token: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a PostingList)> + 'a {
        token
            .char_indices()
            .skip(1)
            .filter_map(move |(end, _)| self.postings.get_key_value(&token[..end]))
            .map(|(token, list)| (token.as_str(), list))
    }

    /// All tokens in ascending order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Vocabulary size
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
