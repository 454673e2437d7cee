//! Page state and the read-only views derived from it.

use garages_core::{format_phone, unique_by_name, Garage};

use crate::selection;

/// Everything the garage page shows.
///
/// Fields are `pub` for rendering; mutate them only through
/// [`crate::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// Garages from the last successful load.
    pub known: Vec<Garage>,
    /// Garages picked by the user, pending submission.
    pub selected: Vec<Garage>,
    pub is_loading: bool,
    pub is_adding: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

/// One table row: the columns shown for a garage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GarageRow {
    pub id: Option<String>,
    pub name: String,
    pub city: String,
    pub address: String,
    /// Display-formatted phone.
    pub phone: String,
    pub selected: bool,
}

impl HomeState {
    #[must_use]
    pub fn is_selected(&self, garage: &Garage) -> bool {
        selection::is_selected(&self.selected, garage)
    }

    /// Known garages with repeated names collapsed, first one wins.
    #[must_use]
    pub fn unique_garages(&self) -> Vec<&Garage> {
        unique_by_name(&self.known)
    }

    /// Table rows for the name-unique view.
    #[must_use]
    pub fn rows(&self) -> Vec<GarageRow> {
        self.unique_garages()
            .into_iter()
            .map(|g| self.row(g))
            .collect()
    }

    /// Table rows for every known garage, duplicates included.
    #[must_use]
    pub fn all_rows(&self) -> Vec<GarageRow> {
        self.known.iter().map(|g| self.row(g)).collect()
    }

    fn row(&self, garage: &Garage) -> GarageRow {
        GarageRow {
            id: garage.id.clone(),
            name: garage.name.clone(),
            city: garage.city_or_empty().to_string(),
            address: garage.address_or_empty().to_string(),
            phone: format_phone(garage.phone.as_deref()),
            selected: self.is_selected(garage),
        }
    }
}
