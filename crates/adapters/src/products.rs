//! Products → search entries

use crate::fields::{describe, finite, present, require, subtitle};
use crate::records::ProductRecord;
use quickfind_core::{Entry, EntryType, Result};

/// Map one product to its search entry
pub fn product_entry(record: &ProductRecord) -> Result<Entry> {
    let label = describe("product", &record.id);
    let id = require(&label, "id", &record.id)?;
    let name = require(&label, "name", &record.name)?;
    if let Some(price) = record.unit_price {
        finite(&label, "unit_price", price)?;
    }

    let reference = present(record.reference.as_deref());
    let category = present(record.category.as_deref());

    let keywords = [Some(name), reference, present(record.barcode.as_deref()), category]
        .into_iter()
        .flatten()
        .map(String::from);

    Ok(Entry::new(EntryType::Product.entry_id(id), EntryType::Product)
        .with_title(name)
        .with_subtitle(subtitle([reference, category]))
        .with_route(format!("/products/{}", id))
        .with_keywords(keywords))
}
