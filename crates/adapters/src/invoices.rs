//! Sale and purchase invoices → search entries

use crate::fields::{
    amount, date_keywords, describe, finite, money, present, require, resolve_partner, subtitle,
};
use crate::records::{Direction, InvoiceRecord};
use quickfind_core::{Entry, EntryType, Result};

/// Map one invoice to its search entry
///
/// Sale invoices become `SaleInvoice` entries with the client name;
/// purchase invoices become `PurchaseInvoice` entries with the supplier name.
pub fn invoice_entry<C, S>(
    record: &InvoiceRecord,
    resolve_client_name: C,
    resolve_supplier_name: S,
) -> Result<Entry>
where
    C: Fn(&str) -> Option<String>,
    S: Fn(&str) -> Option<String>,
{
    let label = describe("invoice", &record.id);
    let id = require(&label, "id", &record.id)?;
    let number = require(&label, "number", &record.number)?;
    let total = finite(&label, "total_amount", record.total_amount)?;

    let (entry_type, route, partner) = match record.direction {
        Direction::Sale => (
            EntryType::SaleInvoice,
            format!("/invoices/sales/{}", id),
            resolve_partner(record.partner_id.as_deref(), resolve_client_name),
        ),
        Direction::Purchase => (
            EntryType::PurchaseInvoice,
            format!("/invoices/purchases/{}", id),
            resolve_partner(record.partner_id.as_deref(), resolve_supplier_name),
        ),
    };

    let mut keywords = vec![number.to_string(), amount(total)];
    keywords.extend(present(record.order_number.as_deref()).map(String::from));
    keywords.extend(partner.clone());
    for date in [record.date, record.due_date].into_iter().flatten() {
        keywords.extend(date_keywords(date));
    }

    Ok(Entry::new(entry_type.entry_id(id), entry_type)
        .with_title(number)
        .with_subtitle(subtitle([
            partner.as_deref(),
            Some(money(total, &record.currency).as_str()),
        ]))
        .with_route(route)
        .with_keywords(keywords))
}
