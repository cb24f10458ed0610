pub mod app_config;
pub mod config;
pub mod filter;
pub mod geo;
pub mod lead;
pub mod settings;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{
    exclusion_reason, filter_leads, ExcludedLead, ExclusionReason, FilterConfig, FilterResult,
};
pub use geo::{distance_km, GeoPoint, EARTH_RADIUS_KM};
pub use lead::CanonicalLead;
pub use settings::{load_settings, Settings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read settings file {path}: {source}")]
    SettingsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file: {0}")]
    SettingsFileParse(#[from] serde_yaml::Error),

    #[error("invalid settings: {0}")]
    Validation(String),
}
