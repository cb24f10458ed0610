use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::geo::GeoPoint;
use crate::settings::{load_settings, Settings};
use crate::ConfigError;

const DEFAULT_SETTINGS_PATH: &str = "./config/settings.yaml";
const DEFAULT_OFFICE_LAT: &str = "49.2026";
const DEFAULT_OFFICE_LNG: &str = "-122.9106";

/// Load application configuration from the settings file and environment.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if the settings file is unreadable, an env var holds
/// an invalid value, or the resulting settings fail validation.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// See [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Layering: built-in defaults, then the settings file, then env overrides.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let non_empty = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let explicit_path = non_empty("LEADSCOUT_SETTINGS_PATH");
    let settings_path = PathBuf::from(explicit_path.as_deref().unwrap_or(DEFAULT_SETTINGS_PATH));

    // Only the default location may be absent.
    let mut settings = if explicit_path.is_none() && !settings_path.exists() {
        Settings::default()
    } else {
        load_settings(&settings_path)?
    };

    if let Some(raw) = non_empty("LEADSCOUT_RADIUS_KM") {
        settings.search.radius_km = raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: "LEADSCOUT_RADIUS_KM".to_string(),
            reason: e.to_string(),
        })?;
    }
    if let Some(raw) = non_empty("LEADSCOUT_DRY_RUN") {
        settings.operational.dry_run = parse_bool("LEADSCOUT_DRY_RUN", &raw)?;
    }
    settings.validate()?;

    let office_location = GeoPoint::new(
        parse_f64("OFFICE_LAT", DEFAULT_OFFICE_LAT)?,
        parse_f64("OFFICE_LNG", DEFAULT_OFFICE_LNG)?,
    );
    if !office_location.is_valid() {
        return Err(ConfigError::Validation(format!(
            "office location {office_location} is outside valid latitude/longitude ranges"
        )));
    }

    let google_places_api_key = non_empty("GOOGLE_PLACES_API_KEY");
    let log_level = or_default("LEADSCOUT_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("LEADSCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LEADSCOUT_USER_AGENT", "leadscout/0.1 (lead-discovery)");
    let places_base_url = non_empty("LEADSCOUT_PLACES_BASE_URL");

    Ok(AppConfig {
        google_places_api_key,
        office_location,
        settings_path,
        settings,
        log_level,
        request_timeout_secs,
        user_agent,
        places_base_url,
    })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
