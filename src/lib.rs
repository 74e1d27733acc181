//! quickfind - in-memory multi-entity search for business records
//!
//! Type a fragment of text and find matching orders, invoices, products,
//! clients or suppliers without a server round-trip.
//!
//! # Quick Start
//!
//! ```
//! use quickfind::{DomainIndexExt, PartnerRecord, SearchIndex};
//!
//! let mut index = SearchIndex::new();
//! index.index_suppliers(&[PartnerRecord {
//!     id: "3".into(),
//!     name: "Électricité Martin".into(),
//!     code: Some("FRN-003".into()),
//!     vat_number: None,
//!     email: None,
//!     phone: None,
//!     city: None,
//! }]);
//!
//! let results = index.search("electricite", 50, 10);
//! assert_eq!(results[0].title, "Électricité Martin");
//! ```
//!
//! # Architecture
//!
//! - `quickfind-core`: entry model, errors, configuration
//! - `quickfind-search`: normalizer, index structures, query engine
//! - `quickfind-adapters`: domain records and bulk indexing

pub use quickfind_adapters::*;
pub use quickfind_core::*;
pub use quickfind_search::*;
