use thiserror::Error;

/// Errors returned by the garages API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured API root could not be parsed.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// At least one create request of a batch failed.
    ///
    /// `created` holds the input indices that were accepted by the server;
    /// `source` is the first failure in input order.
    #[error("created {} of {total} garages: {source}", .created.len())]
    PartialCreate {
        created: Vec<usize>,
        total: usize,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// HTTP status behind this error, when the server sent one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            ClientError::PartialCreate { source, .. } => source.status(),
            ClientError::InvalidBaseUrl { .. } | ClientError::Deserialize { .. } => None,
        }
    }
}
