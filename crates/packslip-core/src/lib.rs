mod app_config;
mod config;
mod order;

use thiserror::Error;

pub use app_config::{AppConfig, TrackingConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use order::{Order, OrderItem, TrackedOrder, UNKNOWN_ORDER_ID};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
