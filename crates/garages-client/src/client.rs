//! HTTP client for the garages REST API.
//!
//! Two endpoints are used: `GET {base}/garages` to list the collection and
//! `POST {base}/garages` to add one record. Non-2xx responses surface as
//! [`ClientError::UnexpectedStatus`]. Nothing is retried.

use std::time::Duration;

use futures::future::join_all;
use reqwest::{Client, Url};

use garages_core::{Garage, RawGarage};

use crate::api::GarageApi;
use crate::error::ClientError;

const GARAGES_PATH: &str = "garages";

/// Client for the garages REST API.
///
/// Use [`GarageClient::with_base_url`] with the configured API root, or point
/// it at a mock server in tests.
#[derive(Debug, Clone)]
pub struct GarageClient {
    client: Client,
    base_url: Url,
}

impl GarageClient {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:5071/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute `http`/`https` URL with a host.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so that joining "garages" appends a
        // segment instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: format!("expected an http or https URL, got scheme '{}'", parsed.scheme()),
            });
        }
        if parsed.host().is_none() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "missing host".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches the full garage list in its raw, alias-laden shape.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array.
    pub async fn list_garages(&self) -> Result<Vec<RawGarage>, ClientError> {
        let url = self.garages_url()?;
        tracing::debug!(url = %url, "listing garages");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let garages: Vec<RawGarage> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: format!("garage list from {url}"),
                source: e,
            })?;

        tracing::debug!(count = garages.len(), "garage list received");
        Ok(garages)
    }

    /// Creates one garage and returns the server's representation of it.
    ///
    /// An empty body yields `Null`; a body that is not JSON is kept as a
    /// string rather than failing a request the server accepted.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    pub async fn create_garage(&self, garage: &Garage) -> Result<serde_json::Value, ClientError> {
        let url = self.garages_url()?;
        tracing::debug!(url = %url, name = %garage.name, "creating garage");

        let response = self.client.post(url.clone()).json(garage).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body)))
    }

    /// Creates every garage with its own concurrent request.
    ///
    /// All-or-nothing reporting: the call succeeds only when every request
    /// succeeds, with results in input order. Requests are independent, so a
    /// failure does not undo the ones the server already accepted; those are
    /// listed in [`ClientError::PartialCreate`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::PartialCreate`] wrapping the first failure in
    /// input order.
    pub async fn create_garages(
        &self,
        garages: &[Garage],
    ) -> Result<Vec<serde_json::Value>, ClientError> {
        let results = join_all(garages.iter().map(|g| self.create_garage(g))).await;
        collect_all_or_nothing(results)
    }

    fn garages_url(&self) -> Result<Url, ClientError> {
        self.base_url
            .join(GARAGES_PATH)
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Folds per-request results into one outcome, keeping input order.
fn collect_all_or_nothing(
    results: Vec<Result<serde_json::Value, ClientError>>,
) -> Result<Vec<serde_json::Value>, ClientError> {
    let total = results.len();
    let mut created = Vec::with_capacity(total);
    let mut values = Vec::with_capacity(total);
    let mut first_error: Option<ClientError> = None;

    for (idx, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => {
                created.push(idx);
                values.push(value);
            }
            Err(e) => {
                tracing::warn!(index = idx, error = %e, "garage create request failed");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        None => Ok(values),
        Some(source) => Err(ClientError::PartialCreate {
            created,
            total,
            source: Box::new(source),
        }),
    }
}

impl GarageApi for GarageClient {
    async fn list_garages(&self) -> Result<Vec<RawGarage>, ClientError> {
        GarageClient::list_garages(self).await
    }

    async fn create_garages(
        &self,
        garages: &[Garage],
    ) -> Result<Vec<serde_json::Value>, ClientError> {
        GarageClient::create_garages(self, garages).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
