pub mod app_config;
pub mod config;
pub mod designations;
pub mod site;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::load_app_config_from_env;
pub use designations::{has_excluded_designation, DEFAULT_EXCLUDED_DESIGNATIONS};
pub use site::{Photo, Site};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
