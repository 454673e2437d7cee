//! The canonical garage record shared by the client and the page.

use serde::{Deserialize, Serialize};

/// A garage record as the server sends it, before normalization.
///
/// The API is loose about field names (`garageName` vs `name`, `town` vs
/// `city`, four spellings of phone), so the raw shape is kept untyped and
/// resolved by [`crate::normalize`].
pub type RawGarage = serde_json::Value;

/// A normalized garage.
///
/// `id` is only present for records the server already knows about. It is the
/// sole identity key: two records with the same `id` are the same garage, and
/// records without one never collide by identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Raw phone as received; see [`crate::format_phone`] for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Garage {
    /// Creates a record with only a name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            city: None,
            address: None,
            phone: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns `true` when both records carry the same concrete `id`.
    ///
    /// Absent ids never match, not even each other.
    #[must_use]
    pub fn same_identity(&self, other: &Garage) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    #[must_use]
    pub fn city_or_empty(&self) -> &str {
        self.city.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn address_or_empty(&self) -> &str {
        self.address.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_without_absent_id() {
        let garage = Garage {
            id: None,
            name: "Sun Garage".to_string(),
            city: Some("Tel Aviv".to_string()),
            address: Some(String::new()),
            phone: Some("0501234567".to_string()),
        };
        let json = serde_json::to_value(&garage).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Sun Garage",
                "city": "Tel Aviv",
                "address": "",
                "phone": "0501234567"
            })
        );
    }

    #[test]
    fn same_identity_requires_concrete_ids() {
        let a = Garage::named("A").with_id("7");
        let b = Garage::named("B").with_id("7");
        let c = Garage::named("A");
        let d = Garage::named("A");

        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
        assert!(!c.same_identity(&d));
    }
}
