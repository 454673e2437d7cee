//! View model for the garage list page.
//!
//! [`HomeState`] holds everything the page shows. It only changes through
//! [`update`], which applies a [`Msg`] and may ask for a [`Command`] to be run
//! against the API. [`GaragePage`] is the async driver that runs those
//! commands and feeds their outcomes back in.

pub mod error;
pub mod messages;
pub mod notices;
pub mod page;
pub mod selection;
pub mod state;
pub mod update;

pub use error::ValidationError;
pub use messages::{Command, Msg};
pub use page::GaragePage;
pub use selection::{is_selected, plan_submission, SubmissionPlan};
pub use state::{GarageRow, HomeState};
pub use update::{transition, update};
