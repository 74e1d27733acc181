//! Field helpers shared by the mapping functions

use chrono::NaiveDate;
use quickfind_core::{Error, Result};

/// Human-readable record label for diagnostics, e.g. `order "42"`
pub(crate) fn describe(family: &str, id: &str) -> String {
    format!("{} {:?}", family, id)
}

/// Trimmed value of a required text field
pub(crate) fn require<'a>(record: &str, field: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::missing_field(record, field));
    }
    Ok(value)
}

/// Reject NaN and infinite amounts
pub(crate) fn finite(record: &str, field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_field(record, field, "not a finite number"));
    }
    Ok(value)
}

/// Non-blank optional text
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolve an optional partner id to a display name
pub(crate) fn resolve_partner<F>(partner_id: Option<&str>, resolve: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    present(partner_id)
        .and_then(resolve)
        .filter(|name| !name.trim().is_empty())
}

/// Amount with two decimals
pub(crate) fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Amount followed by its currency code, if any
pub(crate) fn money(value: f64, currency: &str) -> String {
    match currency.trim() {
        "" => amount(value),
        code => format!("{} {}", amount(value), code),
    }
}

/// A date as typed by users: `dd/mm/yyyy` and `yyyy-mm-dd`
pub(crate) fn date_keywords(date: NaiveDate) -> [String; 2] {
    [
        date.format("%d/%m/%Y").to_string(),
        date.format("%Y-%m-%d").to_string(),
    ]
}

/// Join the non-empty parts with " - "
pub(crate) fn subtitle<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}
