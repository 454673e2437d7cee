//! The data-access seam between the page and the HTTP API.

use std::future::Future;

use garages_core::{Garage, RawGarage};

use crate::error::ClientError;

/// Access to the remote garage collection.
///
/// [`crate::GarageClient`] is the HTTP implementation; the page is generic
/// over this trait so it can be driven by an in-memory fake.
pub trait GarageApi {
    /// Fetches every garage in the raw server shape. One request, no retry.
    fn list_garages(&self) -> impl Future<Output = Result<Vec<RawGarage>, ClientError>> + Send;

    /// Creates each garage with its own request.
    ///
    /// Succeeds only when every request succeeds, returning the server
    /// representations in input order.
    fn create_garages(
        &self,
        garages: &[Garage],
    ) -> impl Future<Output = Result<Vec<serde_json::Value>, ClientError>> + Send;
}
