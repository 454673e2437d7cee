//! Identity rules for the selection and the duplicate check on submit.

use std::collections::HashSet;

use garages_core::Garage;

use crate::error::ValidationError;

/// Returns `true` when `a` and `b` denote the same selectable garage.
///
/// Concrete ids compare by value. Two id-less records are only the same
/// entry when every field matches; an id-less record never matches one with
/// an id.
#[must_use]
pub fn same_entry(a: &Garage, b: &Garage) -> bool {
    if a.id.is_none() && b.id.is_none() {
        return a == b;
    }
    a.same_identity(b)
}

/// Returns `true` if `garage` is part of `selected`.
#[must_use]
pub fn is_selected(selected: &[Garage], garage: &Garage) -> bool {
    selected.iter().any(|s| same_entry(s, garage))
}

/// The outcome of checking a selection against the known garages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPlan {
    /// Selected garages the server does not have yet, in selection order.
    pub new: Vec<Garage>,
    /// Selected garages whose id is already known.
    pub duplicates: Vec<Garage>,
}

/// Splits `selected` into garages to create and garages that already exist.
///
/// Only concrete ids take part in the duplicate check, so an id-less
/// selection is always new.
///
/// # Errors
///
/// - [`ValidationError::NothingSelected`] if `selected` is empty.
/// - [`ValidationError::AllDuplicates`] if every selected garage is known.
pub fn plan_submission(
    known: &[Garage],
    selected: &[Garage],
) -> Result<SubmissionPlan, ValidationError> {
    if selected.is_empty() {
        return Err(ValidationError::NothingSelected);
    }

    let existing_ids: HashSet<&str> = known.iter().filter_map(|g| g.id.as_deref()).collect();

    let (duplicates, new): (Vec<Garage>, Vec<Garage>) = selected
        .iter()
        .cloned()
        .partition(|g| g.id.as_deref().is_some_and(|id| existing_ids.contains(id)));

    if new.is_empty() {
        return Err(ValidationError::AllDuplicates {
            count: selected.len(),
        });
    }

    Ok(SubmissionPlan { new, duplicates })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garage(id: Option<&str>, name: &str) -> Garage {
        let g = Garage::named(name);
        match id {
            Some(id) => g.with_id(id),
            None => g,
        }
    }

    #[test]
    fn same_entry_by_id_ignores_other_fields() {
        assert!(same_entry(
            &garage(Some("1"), "A"),
            &garage(Some("1"), "Renamed")
        ));
        assert!(!same_entry(&garage(Some("1"), "A"), &garage(Some("2"), "A")));
    }

    #[test]
    fn same_entry_without_ids_needs_equal_records() {
        assert!(same_entry(&garage(None, "A"), &garage(None, "A")));
        assert!(!same_entry(&garage(None, "A"), &garage(None, "B")));
        assert!(!same_entry(&garage(None, "A"), &garage(Some("1"), "A")));
    }

    #[test]
    fn is_selected_matches_by_id() {
        let selected = vec![garage(Some("1"), "A"), garage(None, "B")];

        assert!(is_selected(&selected, &garage(Some("1"), "other name")));
        assert!(is_selected(&selected, &garage(None, "B")));
        assert!(!is_selected(&selected, &garage(None, "C")));
        assert!(!is_selected(&selected, &garage(Some("2"), "A")));
        assert!(!is_selected(&[], &garage(Some("1"), "A")));
    }

    #[test]
    fn plan_submission_empty_selection() {
        let known = vec![garage(Some("1"), "A")];
        assert_eq!(
            plan_submission(&known, &[]),
            Err(ValidationError::NothingSelected)
        );
    }

    #[test]
    fn plan_submission_all_duplicates() {
        let known = vec![garage(Some("1"), "A"), garage(Some("2"), "B")];
        let selected = vec![garage(Some("2"), "B"), garage(Some("1"), "A")];
        assert_eq!(
            plan_submission(&known, &selected),
            Err(ValidationError::AllDuplicates { count: 2 })
        );
    }

    #[test]
    fn plan_submission_splits_new_from_duplicates() {
        let known = vec![garage(Some("1"), "A"), garage(None, "Unsaved")];
        let selected = vec![
            garage(Some("3"), "C"),
            garage(Some("1"), "A"),
            garage(None, "Unsaved"),
        ];

        let plan = plan_submission(&known, &selected).unwrap();

        assert_eq!(
            plan.new,
            vec![garage(Some("3"), "C"), garage(None, "Unsaved")]
        );
        assert_eq!(plan.duplicates, vec![garage(Some("1"), "A")]);
        assert_eq!(plan.new.len() + plan.duplicates.len(), selected.len());
    }

    #[test]
    fn plan_submission_with_nothing_known_is_all_new() {
        let selected = vec![garage(Some("1"), "A"), garage(None, "B")];
        let plan = plan_submission(&[], &selected).unwrap();
        assert_eq!(plan.new, selected);
        assert!(plan.duplicates.is_empty());
    }
}
