use std::path::PathBuf;

use crate::geo::GeoPoint;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppConfig {
    /// Required for discovery; absent is fine for dry runs.
    pub google_places_api_key: Option<String>,
    /// Reference point for discovery and distance filtering.
    pub office_location: GeoPoint,
    pub settings_path: PathBuf,
    /// Effective settings after file loading and env overrides.
    pub settings: Settings,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Overrides the production places API root (tests, proxies).
    pub places_base_url: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "google_places_api_key",
                &self.google_places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("office_location", &self.office_location)
            .field("settings_path", &self.settings_path)
            .field("settings", &self.settings)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("places_base_url", &self.places_base_url)
            .finish()
    }
}
