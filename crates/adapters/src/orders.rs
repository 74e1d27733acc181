//! Orders → search entries

use crate::fields::{
    amount, date_keywords, describe, finite, money, present, require, resolve_partner, subtitle,
};
use crate::records::{Direction, OrderRecord};
use quickfind_core::{Entry, EntryType, Result};

/// Map one order to its search entry
///
/// The partner is resolved with `resolve_client_name` for sale orders and
/// `resolve_supplier_name` for purchase orders.
pub fn order_entry<C, S>(
    record: &OrderRecord,
    resolve_client_name: C,
    resolve_supplier_name: S,
) -> Result<Entry>
where
    C: Fn(&str) -> Option<String>,
    S: Fn(&str) -> Option<String>,
{
    let label = describe("order", &record.id);
    let id = require(&label, "id", &record.id)?;
    let number = require(&label, "number", &record.number)?;
    let total = finite(&label, "total_amount", record.total_amount)?;

    let partner = match record.direction {
        Direction::Sale => resolve_partner(record.partner_id.as_deref(), resolve_client_name),
        Direction::Purchase => resolve_partner(record.partner_id.as_deref(), resolve_supplier_name),
    };

    let mut keywords = vec![number.to_string(), amount(total)];
    keywords.extend(present(record.reference.as_deref()).map(String::from));
    keywords.extend(partner.clone());
    keywords.extend(present(record.status.as_deref()).map(String::from));
    if let Some(date) = record.date {
        keywords.extend(date_keywords(date));
    }

    Ok(Entry::new(EntryType::Order.entry_id(id), EntryType::Order)
        .with_title(number)
        .with_subtitle(subtitle([
            partner.as_deref(),
            Some(money(total, &record.currency).as_str()),
        ]))
        .with_route(format!("/orders/{}", id))
        .with_keywords(keywords))
}
