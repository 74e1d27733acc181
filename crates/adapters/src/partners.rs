//! Clients and suppliers → search entries

use crate::fields::{describe, present, require, subtitle};
use crate::records::PartnerRecord;
use quickfind_core::{Entry, EntryType, Result};

/// Map one client to its search entry
pub fn client_entry(record: &PartnerRecord) -> Result<Entry> {
    partner_entry(record, EntryType::Client, "client", "/clients")
}

/// Map one supplier to its search entry
pub fn supplier_entry(record: &PartnerRecord) -> Result<Entry> {
    partner_entry(record, EntryType::Supplier, "supplier", "/suppliers")
}

fn partner_entry(
    record: &PartnerRecord,
    entry_type: EntryType,
    family: &str,
    route_prefix: &str,
) -> Result<Entry> {
    let label = describe(family, &record.id);
    let id = require(&label, "id", &record.id)?;
    let name = require(&label, "name", &record.name)?;

    let code = present(record.code.as_deref());
    let city = present(record.city.as_deref());

    let keywords = [
        Some(name),
        code,
        present(record.vat_number.as_deref()),
        present(record.email.as_deref()),
        present(record.phone.as_deref()),
        city,
    ]
    .into_iter()
    .flatten()
    .map(String::from);

    Ok(Entry::new(entry_type.entry_id(id), entry_type)
        .with_title(name)
        .with_subtitle(subtitle([code, city]))
        .with_route(format!("{}/{}", route_prefix, id))
        .with_keywords(keywords))
}
