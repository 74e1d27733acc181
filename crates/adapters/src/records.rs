//! Domain records handed over by the business collaborators
//!
//! These are the shapes the adapters read; the index never stores them.
//! Optional fields default when absent so records deserialize from partial
//! API payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a document is on the selling or the buying side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Issued to a client
    Sale,
    /// Received from a supplier
    Purchase,
}

/// Sale or purchase order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Record id
    pub id: String,
    /// Order number, e.g. "BC-2024-0042"
    pub number: String,
    /// Sale order (client) or purchase order (supplier)
    pub direction: Direction,
    /// Client or supplier id, resolved to a name at indexing time
    #[serde(default)]
    pub partner_id: Option<String>,
    /// Partner-side reference
    #[serde(default)]
    pub reference: Option<String>,
    /// Order date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Total amount including tax
    #[serde(default)]
    pub total_amount: f64,
    /// ISO currency code
    #[serde(default)]
    pub currency: String,
    /// Workflow status label
    #[serde(default)]
    pub status: Option<String>,
}

/// Sale or purchase invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Record id
    pub id: String,
    /// Invoice number, e.g. "FAC-2024-0107"
    pub number: String,
    /// Sale invoice (client) or purchase invoice (supplier)
    pub direction: Direction,
    /// Client or supplier id
    #[serde(default)]
    pub partner_id: Option<String>,
    /// Number of the originating order
    #[serde(default)]
    pub order_number: Option<String>,
    /// Invoice date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Payment due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Total amount including tax
    #[serde(default)]
    pub total_amount: f64,
    /// ISO currency code
    #[serde(default)]
    pub currency: String,
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Record id
    pub id: String,
    /// Product name
    pub name: String,
    /// Internal reference, e.g. "PMP-001"
    #[serde(default)]
    pub reference: Option<String>,
    /// EAN/UPC barcode
    #[serde(default)]
    pub barcode: Option<String>,
    /// Category label
    #[serde(default)]
    pub category: Option<String>,
    /// Unit price excluding tax
    #[serde(default)]
    pub unit_price: Option<f64>,
}

/// Client or supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRecord {
    /// Record id
    pub id: String,
    /// Company or person name
    pub name: String,
    /// Short partner code
    #[serde(default)]
    pub code: Option<String>,
    /// Intra-community VAT number
    #[serde(default)]
    pub vat_number: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
}
