//! HTTP client for the Google Places web service.
//!
//! Wraps `reqwest` with API key handling, envelope status checks, and typed
//! response deserialization. Statuses other than `OK` and `ZERO_RESULTS`
//! surface as [`PlacesError::ApiStatus`].

use std::time::Duration;

use leadscout_core::GeoPoint;
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{NearbyPlace, NearbySearchResponse, PlaceDetails, PlaceDetailsResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Fields requested from Place Details. Anything else is billed but unused.
pub const DETAIL_FIELDS: &[&str] = &[
    "place_id",
    "name",
    "rating",
    "user_ratings_total",
    "formatted_address",
    "formatted_phone_number",
    "website",
    "geometry",
    "types",
];

/// Parameters for a single Nearby Search call.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearchRequest {
    pub location: GeoPoint,
    pub radius_meters: u32,
    pub place_type: String,
    pub language: String,
}

/// Client for the Google Places web service.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends endpoint paths
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs a Nearby Search and returns the first page of results.
    ///
    /// Result entries that are not JSON objects are skipped.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] if the API reports a failure status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the envelope is malformed.
    pub async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<Vec<NearbyPlace>, PlacesError> {
        let location = request.location.to_string();
        let radius = request.radius_meters.to_string();
        let url = self.build_url(
            "nearbysearch/json",
            &[
                ("location", &location),
                ("radius", &radius),
                ("type", &request.place_type),
                ("language", &request.language),
            ],
        )?;

        let body = self.request_json(&url).await?;
        let envelope: NearbySearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("nearbysearch(location={location})"),
                source: e,
            })?;
        Self::check_status(&envelope.status, envelope.error_message.as_deref())?;

        Ok(envelope
            .results
            .into_iter()
            .filter_map(|v| serde_json::from_value::<NearbyPlace>(v).ok())
            .collect())
    }

    /// Fetches details for one place.
    ///
    /// Returns `Ok(None)` when the envelope is successful but carries no
    /// `result`.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] if the API reports a failure status
    ///   (e.g. `NOT_FOUND`).
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
        language: &str,
    ) -> Result<Option<PlaceDetails>, PlacesError> {
        let fields = DETAIL_FIELDS.join(",");
        let url = self.build_url(
            "details/json",
            &[
                ("place_id", place_id),
                ("fields", &fields),
                ("language", language),
            ],
        )?;

        let body = self.request_json(&url).await?;
        let envelope: PlaceDetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;
        Self::check_status(&envelope.status, envelope.error_message.as_deref())?;

        envelope
            .result
            .map(|result| {
                serde_json::from_value::<PlaceDetails>(result).map_err(|e| {
                    PlacesError::Deserialize {
                        context: format!("details(place_id={place_id}).result"),
                        source: e,
                    }
                })
            })
            .transpose()
    }

    /// Builds the endpoint URL with percent-encoded query parameters.
    ///
    /// The API key always comes first.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body as
    /// JSON.
    ///
    /// Transport errors are stripped of their URL, which carries the API key.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: redact_key(url),
            source: e,
        })
    }

    fn check_status(status: &str, error_message: Option<&str>) -> Result<(), PlacesError> {
        match status {
            "OK" | "ZERO_RESULTS" => Ok(()),
            other => Err(PlacesError::ApiStatus {
                status: other.to_string(),
                message: error_message.unwrap_or("no error message").to_string(),
            }),
        }
    }
}

/// The URL without its query string, so the API key never lands in logs.
fn redact_key(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
