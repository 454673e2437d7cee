//! State transitions for the garage page.
//!
//! [`update`] is the only place [`HomeState`] changes. It performs no I/O;
//! network work is returned as a [`Command`] for the driver to run, and the
//! result comes back as another [`Msg`].

use garages_client::ClientError;
use garages_core::normalize_garages;

use crate::messages::{Command, Msg};
use crate::notices;
use crate::selection::{is_selected, plan_submission, same_entry};
use crate::state::HomeState;

/// Applies `msg` to `state` and returns the command to run next, if any.
#[must_use]
pub fn update(state: &mut HomeState, msg: Msg) -> Option<Command> {
    match msg {
        Msg::Load => {
            state.is_loading = true;
            state.error_message = None;
            Some(Command::Load)
        }
        Msg::Loaded(raw) => {
            state.known = normalize_garages(&raw);
            state.is_loading = false;
            tracing::info!(count = state.known.len(), "garages loaded");
            None
        }
        Msg::LoadFailed(err) => {
            tracing::error!(error = %err, status = ?err.status(), "failed to load garages");
            state.error_message = Some(notices::LOAD_FAILED.to_string());
            state.is_loading = false;
            None
        }
        Msg::Select(garage) => {
            if !is_selected(&state.selected, &garage) {
                state.selected.push(garage);
            }
            None
        }
        Msg::Deselect(garage) => {
            state.selected.retain(|s| !same_entry(s, &garage));
            None
        }
        Msg::ToggleSelection(garage) => {
            if is_selected(&state.selected, &garage) {
                state.selected.retain(|s| !same_entry(s, &garage));
            } else {
                state.selected.push(garage);
            }
            None
        }
        Msg::SetSelection(garages) => {
            state.selected.clear();
            for garage in garages {
                if !is_selected(&state.selected, &garage) {
                    state.selected.push(garage);
                }
            }
            None
        }
        Msg::ClearSelection => {
            state.selected.clear();
            None
        }
        Msg::Submit => submit(state),
        Msg::Created { count } => {
            tracing::info!(count, "garages added");
            state.selected.clear();
            state.error_message = None;
            state.success_message = Some(notices::created(count));
            state.is_adding = false;
            state.is_loading = true;
            Some(Command::Load)
        }
        Msg::CreateFailed(err) => {
            if let ClientError::PartialCreate { created, total, .. } = &err {
                tracing::warn!(
                    created = ?created,
                    total,
                    "some garages were added before the failure"
                );
            }
            tracing::error!(error = %err, "failed to add garages");
            state.error_message = Some(notices::CREATE_FAILED.to_string());
            state.is_adding = false;
            None
        }
    }
}

/// Pure form of [`update`]: consumes the old state and returns the new one.
#[must_use]
pub fn transition(mut state: HomeState, msg: Msg) -> (HomeState, Option<Command>) {
    let command = update(&mut state, msg);
    (state, command)
}

fn submit(state: &mut HomeState) -> Option<Command> {
    let plan = match plan_submission(&state.known, &state.selected) {
        Ok(plan) => plan,
        Err(err) => {
            tracing::info!(reason = %err, "submission rejected");
            state.error_message = Some(err.notice());
            return None;
        }
    };

    if !plan.duplicates.is_empty() {
        tracing::warn!(
            duplicates = plan.duplicates.len(),
            new = plan.new.len(),
            "skipping garages that already exist"
        );
        state.error_message = Some(notices::some_duplicates(
            plan.duplicates.len(),
            plan.new.len(),
        ));
    }

    state.is_adding = true;
    state.success_message = None;
    Some(Command::Create(plan.new))
}

#[cfg(test)]
#[path = "update_test.rs"]
mod tests;
