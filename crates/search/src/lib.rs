//! In-memory multi-entity search index
//!
//! This crate provides:
//! - Text normalization shared by indexing and querying
//! - EntryStore, TypePartition and InvertedIndex structures
//! - SearchIndex: the aggregate owning them, with upsert/remove/clear
//! - The query engine: prefix-aware scoring, ranking and per-type caps
//! - SharedSearchIndex: one-lock wrapper for multi-threaded hosts
//!
//! # Usage
//!
//! ```
//! use quickfind_search::SearchIndex;
//! use quickfind_core::{Entry, EntryType};
//!
//! let mut index = SearchIndex::new();
//! index.upsert(
//!     Entry::new("p1", EntryType::Product)
//!         .with_title("Pompe hydraulique")
//!         .with_keywords(["Pompe hydraulique", "PMP-001"]),
//! );
//!
//! let results = index.search("pompe", 50, 10);
//! assert_eq!(results[0].id, "p1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod indexer;
pub mod normalize;
pub mod partition;
pub mod query;
pub mod shared;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use index::{InvertedIndex, PostingList};
pub use indexer::SearchIndex;
pub use normalize::{normalize, query_tokens};
pub use partition::TypePartition;
pub use query::{SearchHit, EXACT_MATCH_WEIGHT, PARTIAL_MATCH_WEIGHT};
pub use shared::SharedSearchIndex;
pub use stats::IndexStats;
pub use store::EntryStore;
