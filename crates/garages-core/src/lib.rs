pub mod app_config;
pub mod config;
pub mod garage;
pub mod names;
pub mod normalize;
pub mod phone;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use garage::{Garage, RawGarage};
pub use names::{name_key, unique_by_name};
pub use normalize::{normalize_garage, normalize_garages};
pub use phone::format_phone;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
