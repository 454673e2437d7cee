//! Async driver that connects [`HomeState`] to a [`GarageApi`].

use garages_client::GarageApi;
use garages_core::Garage;

use crate::messages::{Command, Msg};
use crate::state::HomeState;
use crate::update::update;

/// The garage page: state plus the API it talks to.
///
/// Commands run one at a time in the order `update` emits them. There is no
/// cancellation; a load that finishes later simply overwrites `known`.
pub struct GaragePage<A> {
    api: A,
    state: HomeState,
}

impl<A: GarageApi> GaragePage<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: HomeState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &HomeState {
        &self.state
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Applies `msg`, then runs every command it leads to until the page settles.
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            if let Some(command) = update(&mut self.state, msg) {
                next = Some(self.run(command).await);
            }
        }
    }

    /// Loads the garage list, replacing whatever was known.
    pub async fn load(&mut self) {
        self.dispatch(Msg::Load).await;
    }

    /// Adds the selected garages that are not known yet and reloads on success.
    pub async fn submit_selection(&mut self) {
        self.dispatch(Msg::Submit).await;
    }

    pub fn select(&mut self, garage: Garage) {
        self.apply_local(Msg::Select(garage));
    }

    pub fn deselect(&mut self, garage: Garage) {
        self.apply_local(Msg::Deselect(garage));
    }

    pub fn toggle(&mut self, garage: Garage) {
        self.apply_local(Msg::ToggleSelection(garage));
    }

    pub fn set_selection(&mut self, garages: Vec<Garage>) {
        self.apply_local(Msg::SetSelection(garages));
    }

    pub fn clear_selection(&mut self) {
        self.apply_local(Msg::ClearSelection);
    }

    #[must_use]
    pub fn is_selected(&self, garage: &Garage) -> bool {
        self.state.is_selected(garage)
    }

    /// Selection messages never need the network.
    fn apply_local(&mut self, msg: Msg) {
        let command = update(&mut self.state, msg);
        debug_assert!(command.is_none(), "selection change emitted {command:?}");
    }

    async fn run(&self, command: Command) -> Msg {
        match command {
            Command::Load => match self.api.list_garages().await {
                Ok(raw) => Msg::Loaded(raw),
                Err(err) => Msg::LoadFailed(err),
            },
            Command::Create(garages) => match self.api.create_garages(&garages).await {
                Ok(_) => Msg::Created {
                    count: garages.len(),
                },
                Err(err) => Msg::CreateFailed(err),
            },
        }
    }
}
