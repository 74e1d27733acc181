//! Core types for the search index
//!
//! This module defines the unit of indexing:
//! - EntryType: closed set of entity families
//! - Entry: denormalized, search-ready view of one domain record

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// EntryType
// ============================================================================

/// Entity family an entry belongs to
///
/// The kebab-case name is stable: it appears in serialized entries, in
/// canonical entry ids and in statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    /// Sale or purchase order
    Order,
    /// Invoice issued to a client
    SaleInvoice,
    /// Invoice received from a supplier
    PurchaseInvoice,
    /// Catalog product
    Product,
    /// Client (customer) partner
    Client,
    /// Supplier partner
    Supplier,
}

impl EntryType {
    /// All variants, in display order
    pub const ALL: [EntryType; 6] = [
        EntryType::Order,
        EntryType::SaleInvoice,
        EntryType::PurchaseInvoice,
        EntryType::Product,
        EntryType::Client,
        EntryType::Supplier,
    ];

    /// Stable name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Order => "order",
            EntryType::SaleInvoice => "sale-invoice",
            EntryType::PurchaseInvoice => "purchase-invoice",
            EntryType::Product => "product",
            EntryType::Client => "client",
            EntryType::Supplier => "supplier",
        }
    }

    /// Canonical index id for a record of this type
    ///
    /// # Example
    ///
    /// ```
    /// use quickfind_core::EntryType;
    ///
    /// assert_eq!(EntryType::SaleInvoice.entry_id("42"), "sale-invoice:42");
    /// ```
    pub fn entry_id(&self, record_id: &str) -> String {
        format!("{}:{}", self.as_str(), record_id)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EntryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownEntryType(s.to_string()))
    }
}

// ============================================================================
// Entry
// ============================================================================

/// Search-indexed representation of a domain record
///
/// `route` is opaque to the index; the consuming UI knows how to navigate it.
/// `keywords` may contain duplicates and empty strings; they add no weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier within the index
    pub id: String,
    /// Entity family
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Short display string (document number, entity name)
    pub title: String,
    /// Secondary display string
    pub subtitle: String,
    /// Navigation target
    pub route: String,
    /// Raw strings significant for search
    pub keywords: Vec<String>,
}

impl Entry {
    /// Create an entry with empty display fields and no keywords
    pub fn new(id: impl Into<String>, entry_type: EntryType) -> Self {
        Entry {
            id: id.into(),
            entry_type,
            title: String::new(),
            subtitle: String::new(),
            route: String::new(),
            keywords: Vec::new(),
        }
    }

    /// Builder: set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: set subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Builder: set route
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Builder: set keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Check the entry can be indexed
    ///
    /// The type is enforced by `EntryType`; only the id can be malformed.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::MissingId);
        }
        Ok(())
    }
}
