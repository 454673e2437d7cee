use garages_client::ClientError;
use garages_core::{Garage, RawGarage};

/// Everything that can happen to the page: user actions and API outcomes.
#[derive(Debug)]
pub enum Msg {
    /// (Re)load the garage list.
    Load,
    Loaded(Vec<RawGarage>),
    LoadFailed(ClientError),

    Select(Garage),
    Deselect(Garage),
    ToggleSelection(Garage),
    /// Replace the whole selection, as a multi-select control does.
    SetSelection(Vec<Garage>),
    ClearSelection,

    /// Add the selected garages that are not already known.
    Submit,
    Created { count: usize },
    CreateFailed(ClientError),
}

/// Work the driver must run against the API after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    Create(Vec<Garage>),
}
