//! Normalization of raw server records into [`Garage`]s.
//!
//! The server has been fed by several importers over time and does not agree
//! with itself on field names. Each canonical field has an ordered alias list
//! in [`FIELD_ALIASES`]; the first alias holding a usable value wins.

use serde_json::Value;

use crate::garage::{Garage, RawGarage};

/// Canonical text fields of a [`Garage`] that are resolved through aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    City,
    Address,
    Phone,
}

/// Alias lookup rule for one canonical field.
#[derive(Debug)]
pub struct FieldAliases {
    pub field: Field,
    /// Raw keys in priority order.
    pub aliases: &'static [&'static str],
    /// When set, an empty string does not satisfy the lookup and the next
    /// alias is tried.
    pub skip_empty: bool,
}

pub const FIELD_ALIASES: &[FieldAliases] = &[
    FieldAliases {
        field: Field::Name,
        aliases: &["garageName", "name"],
        skip_empty: true,
    },
    FieldAliases {
        field: Field::City,
        aliases: &["city", "town"],
        skip_empty: false,
    },
    FieldAliases {
        field: Field::Address,
        aliases: &["address"],
        skip_empty: false,
    },
    FieldAliases {
        field: Field::Phone,
        aliases: &["phone", "phoneNumber", "telephone", "mobile"],
        skip_empty: false,
    },
];

const ID_KEY: &str = "id";

/// Converts one raw record into a [`Garage`].
///
/// Every text field is always populated (empty string when no alias matched);
/// only `id` may be absent. Non-object input yields an all-empty record.
#[must_use]
pub fn normalize_garage(raw: &RawGarage) -> Garage {
    let id = raw.get(ID_KEY).and_then(value_to_text);

    Garage {
        id,
        name: resolve(raw, Field::Name),
        city: Some(resolve(raw, Field::City)),
        address: Some(resolve(raw, Field::Address)),
        phone: Some(resolve(raw, Field::Phone)),
    }
}

/// Normalizes a loaded list, preserving order.
#[must_use]
pub fn normalize_garages(raw: &[RawGarage]) -> Vec<Garage> {
    raw.iter().map(normalize_garage).collect()
}

/// Looks up `field` in the alias table and returns the first usable value.
#[must_use]
pub fn resolve(raw: &RawGarage, field: Field) -> String {
    let Some(rule) = FIELD_ALIASES.iter().find(|rule| rule.field == field) else {
        return String::new();
    };

    rule.aliases
        .iter()
        .filter_map(|alias| raw.get(alias).and_then(value_to_text))
        .find(|text| !(rule.skip_empty && text.is_empty()))
        .unwrap_or_default()
}

/// Renders a JSON value as text. `null` is treated as missing.
fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
