//! Shared configuration, category registry, and geographic primitives for
//! the jurimap workspace.

mod app_config;
mod categories;
mod config;
pub mod geo;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use categories::{
    default_categories, load_categories, CategoriesFile, IconDescriptor, ServiceCategory,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{haversine_km, Coordinate, GeoError, SearchOrigin};

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read categories file {path}: {source}")]
    CategoriesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse categories file: {0}")]
    CategoriesFileParse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
