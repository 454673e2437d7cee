use thiserror::Error;

use crate::notices;

/// Local checks that stop a submission before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no garages selected")]
    NothingSelected,

    #[error("all {count} selected garages already exist")]
    AllDuplicates { count: usize },
}

impl ValidationError {
    /// The text shown to the user for this error.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            ValidationError::NothingSelected => notices::NOTHING_SELECTED.to_string(),
            ValidationError::AllDuplicates { count } => notices::all_duplicates(*count),
        }
    }
}
