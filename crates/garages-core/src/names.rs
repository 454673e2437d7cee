//! Display-only de-duplication by garage name.

use std::collections::HashSet;

use crate::garage::Garage;

/// The comparison key for a garage name: lower-cased and trimmed.
#[must_use]
pub fn name_key(name: &str) -> String {
    name.to_lowercase().trim().to_string()
}

/// Returns the first garage for each distinct name key, in original order.
///
/// Garages whose key is empty are left out entirely. The input is not touched;
/// this only shapes what is shown.
#[must_use]
pub fn unique_by_name(garages: &[Garage]) -> Vec<&Garage> {
    let mut seen: HashSet<String> = HashSet::new();
    garages
        .iter()
        .filter(|garage| {
            let key = name_key(&garage.name);
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}
