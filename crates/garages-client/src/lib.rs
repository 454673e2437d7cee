pub mod api;
pub mod client;
pub mod error;

pub use api::GarageApi;
pub use client::GarageClient;
pub use error::ClientError;
