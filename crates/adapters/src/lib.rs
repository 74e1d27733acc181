//! Domain adapters for the quickfind search index
//!
//! This crate provides:
//! - Domain record types (orders, invoices, products, clients, suppliers)
//! - One mapping function per family, record → `Entry`
//! - DomainIndexExt: bulk indexing methods on `SearchIndex`
//!
//! A record that cannot be mapped is logged and skipped; the rest of the
//! batch is still indexed.
//!
//! # Usage
//!
//! ```
//! use quickfind_adapters::{DomainIndexExt, PartnerRecord};
//! use quickfind_search::SearchIndex;
//!
//! let clients = vec![PartnerRecord {
//!     id: "7".into(),
//!     name: "ACME Industrie".into(),
//!     code: None,
//!     vat_number: None,
//!     email: None,
//!     phone: None,
//!     city: Some("Lyon".into()),
//! }];
//!
//! let mut index = SearchIndex::new();
//! let report = index.index_clients(&clients);
//! assert_eq!(report.indexed, 1);
//! assert_eq!(index.search("acme", 50, 10)[0].route, "/clients/7");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod fields;
pub mod invoices;
pub mod orders;
pub mod partners;
pub mod products;
pub mod records;

pub use invoices::invoice_entry;
pub use orders::order_entry;
pub use partners::{client_entry, supplier_entry};
pub use products::product_entry;
pub use records::{Direction, InvoiceRecord, OrderRecord, PartnerRecord, ProductRecord};

use quickfind_core::{Entry, Result};
use quickfind_search::SearchIndex;
use serde::Serialize;
use tracing::{debug, warn};

// ============================================================================
// BatchReport
// ============================================================================

/// Outcome of one bulk indexing call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Records upserted into the index
    pub indexed: usize,
    /// Records skipped because they could not be mapped or indexed
    pub skipped: usize,
}

// ============================================================================
// Index Extension
// ============================================================================

mod sealed {
    use quickfind_core::{Entry, Result};

    /// Single-entry upsert used by the bulk methods; not reachable outside this crate
    pub trait UpsertEntry {
        fn upsert_entry(&mut self, entry: Entry) -> Result<()>;
    }
}

/// Bulk indexing of domain records
///
/// Implemented for [`SearchIndex`]. For a `SharedSearchIndex`, call these on
/// the write guard (`shared.write().index_orders(..)`) so a batch is applied
/// under one lock.
///
/// The trait is sealed. Single entries go through `SearchIndex::try_upsert`;
/// the trait only adds the five `index_*` methods:
///
/// ```compile_fail
/// use quickfind_adapters::DomainIndexExt;
/// use quickfind_core::{Entry, EntryType};
/// use quickfind_search::SearchIndex;
///
/// let mut index = SearchIndex::new();
/// index.upsert_entry(Entry::new("client:1", EntryType::Client));
/// ```
pub trait DomainIndexExt: sealed::UpsertEntry {
    /// Index orders, resolving partner names per order direction
    fn index_orders<C, S>(
        &mut self,
        records: &[OrderRecord],
        resolve_client_name: C,
        resolve_supplier_name: S,
    ) -> BatchReport
    where
        C: Fn(&str) -> Option<String>,
        S: Fn(&str) -> Option<String>,
    {
        index_batch(self, "order", records, |r| {
            order_entry(r, &resolve_client_name, &resolve_supplier_name)
        })
    }

    /// Index sale and purchase invoices
    fn index_invoices<C, S>(
        &mut self,
        records: &[InvoiceRecord],
        resolve_client_name: C,
        resolve_supplier_name: S,
    ) -> BatchReport
    where
        C: Fn(&str) -> Option<String>,
        S: Fn(&str) -> Option<String>,
    {
        index_batch(self, "invoice", records, |r| {
            invoice_entry(r, &resolve_client_name, &resolve_supplier_name)
        })
    }

    /// Index catalog products
    fn index_products(&mut self, records: &[ProductRecord]) -> BatchReport {
        index_batch(self, "product", records, product_entry)
    }

    /// Index clients
    fn index_clients(&mut self, records: &[PartnerRecord]) -> BatchReport {
        index_batch(self, "client", records, client_entry)
    }

    /// Index suppliers
    fn index_suppliers(&mut self, records: &[PartnerRecord]) -> BatchReport {
        index_batch(self, "supplier", records, supplier_entry)
    }
}

impl sealed::UpsertEntry for SearchIndex {
    fn upsert_entry(&mut self, entry: Entry) -> Result<()> {
        self.try_upsert(entry)
    }
}

impl DomainIndexExt for SearchIndex {}

/// Map and upsert each record independently
fn index_batch<T, R, F>(target: &mut T, family: &str, records: &[R], mut map: F) -> BatchReport
where
    T: sealed::UpsertEntry + ?Sized,
    F: FnMut(&R) -> Result<Entry>,
{
    let mut report = BatchReport::default();
    if records.is_empty() {
        return report;
    }

    for record in records {
        match map(record).and_then(|entry| target.upsert_entry(entry)) {
            Ok(()) => report.indexed += 1,
            Err(e) => {
                warn!(family, error = %e, "Skipping record that could not be indexed");
                report.skipped += 1;
            }
        }
    }

    debug!(
        family,
        indexed = report.indexed,
        skipped = report.skipped,
        "Indexed batch"
    );
    report
}
