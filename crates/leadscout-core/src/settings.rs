//! File-based search and filter settings.
//!
//! Settings are read from a YAML file whose sections mirror the discovery
//! request (`search`), the lead thresholds (`filters`), and run switches
//! (`operational`). Any key left out of the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::filter::FilterConfig;
use crate::ConfigError;

/// Largest radius the Places Nearby Search accepts (50 000 m).
pub const MAX_RADIUS_KM: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
    pub filters: FilterSettings,
    pub operational: OperationalSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Search radius in kilometers. Used both for the discovery request and
    /// as the filter cut-off.
    pub radius_km: f64,
    /// Places API place type, e.g. `restaurant`.
    #[serde(rename = "type")]
    pub place_type: String,
    pub language: String,
    pub include_details: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            radius_km: 5.0,
            place_type: "restaurant".to_string(),
            language: "en".to_string(),
            include_details: true,
        }
    }
}

impl SearchSettings {
    /// The discovery request radius, derived from `radius_km`.
    ///
    /// Exact for any radius accepted by [`Settings::validate`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn radius_meters(&self) -> u32 {
        (self.radius_km * 1000.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub require_phone: bool,
    pub rating: RatingRange,
    pub reviews: ReviewRange,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            require_phone: true,
            rating: RatingRange::default(),
            reviews: ReviewRange::default(),
        }
    }
}

/// Inclusive star-rating bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

impl Default for RatingRange {
    fn default() -> Self {
        Self { min: 4.0, max: 5.0 }
    }
}

/// Inclusive review-count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewRange {
    pub min: u32,
    pub max: u32,
}

impl Default for ReviewRange {
    fn default() -> Self {
        Self { min: 10, max: 1000 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationalSettings {
    /// Stop before any places API call.
    pub dry_run: bool,
}

impl Settings {
    /// Thresholds for the filter pipeline.
    ///
    /// The radius is `search.radius_km`; there is no separate filter radius.
    #[must_use]
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            radius_km: self.search.radius_km,
            rating_min: self.filters.rating.min,
            rating_max: self.filters.rating.max,
            review_min: self.filters.reviews.min,
            review_max: self.filters.reviews.max,
            require_phone: self.filters.require_phone,
        }
    }

    /// Check the invariants the filter pipeline relies on callers to uphold.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on a radius outside
    /// `(0, MAX_RADIUS_KM]` or an inverted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let radius = self.search.radius_km;
        if !radius.is_finite() || radius <= 0.0 || radius > MAX_RADIUS_KM {
            return Err(ConfigError::Validation(format!(
                "search.radius_km must be greater than 0 and at most {MAX_RADIUS_KM}, got {radius}"
            )));
        }

        let rating = self.filters.rating;
        if rating.min.is_nan() || rating.max.is_nan() || rating.min > rating.max {
            return Err(ConfigError::Validation(format!(
                "filters.rating.min ({}) must not exceed filters.rating.max ({})",
                rating.min, rating.max
            )));
        }

        let reviews = self.filters.reviews;
        if reviews.min > reviews.max {
            return Err(ConfigError::Validation(format!(
                "filters.reviews.min ({}) must not exceed filters.reviews.max ({})",
                reviews.min, reviews.max
            )));
        }

        if self.search.place_type.trim().is_empty() {
            return Err(ConfigError::Validation(
                "search.type must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load settings from a YAML file without validating them.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SettingsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_settings(&content)
}

/// Parse settings from YAML text. An empty document yields the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::SettingsFileParse`] on malformed YAML.
pub fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
