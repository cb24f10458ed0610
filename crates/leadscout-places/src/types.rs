//! Google Places API response types.
//!
//! Both endpoints wrap their payload in an envelope carrying a `status`
//! string and, on failure, an `error_message`. Place fields are parsed
//! leniently: a field with an unexpected JSON type becomes `None` instead of
//! failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserialize an optional field, mapping any type mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Deserialize a list of strings, dropping non-string entries.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// Response of `nearbysearch/json`.
///
/// `results` is kept as raw JSON so a single malformed entry can be skipped
/// without rejecting the page.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

/// Response of `details/json`.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Place shapes
// ---------------------------------------------------------------------------

/// `geometry` object shared by both place shapes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Geometry {
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A summary record from Nearby Search.
///
/// Never carries a phone number or website. `vicinity` is a short address
/// and the location is approximate.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NearbyPlace {
    #[serde(default, deserialize_with = "lenient")]
    pub place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_ratings_total: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub vicinity: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub types: Vec<String>,
}

/// A detailed record from Place Details.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaceDetails {
    #[serde(default, deserialize_with = "lenient")]
    pub place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_ratings_total: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_address: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub formatted_phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_place_parses_full_record() {
        let json = serde_json::json!({
            "place_id": "ChIJ1",
            "name": "River Market Cafe",
            "rating": 4.6,
            "user_ratings_total": 321,
            "vicinity": "810 Quayside Dr, New Westminster",
            "geometry": { "location": { "lat": 49.2, "lng": -122.91 } },
            "types": ["cafe", "food"]
        });
        let place: NearbyPlace = serde_json::from_value(json).unwrap();
        assert_eq!(place.place_id.as_deref(), Some("ChIJ1"));
        assert_eq!(place.user_ratings_total, Some(321));
        assert_eq!(
            place.geometry.and_then(|g| g.location),
            Some(LatLng { lat: 49.2, lng: -122.91 })
        );
        assert_eq!(place.types, vec!["cafe", "food"]);
    }

    #[test]
    fn wrong_field_types_degrade_to_none() {
        let json = serde_json::json!({
            "place_id": "ChIJ2",
            "name": "Odd Place",
            "rating": "four",
            "user_ratings_total": -3,
            "geometry": { "location": { "lat": "49.2" } },
            "types": ["bar", 7, null]
        });
        let place: NearbyPlace = serde_json::from_value(json).unwrap();
        assert_eq!(place.rating, None);
        assert_eq!(place.user_ratings_total, None);
        assert_eq!(place.geometry, Some(Geometry { location: None }));
        assert_eq!(place.types, vec!["bar"]);
    }

    #[test]
    fn empty_object_is_all_absent() {
        let place: PlaceDetails = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(place, PlaceDetails::default());
    }

    #[test]
    fn explicit_nulls_are_absent() {
        let json = serde_json::json!({
            "place_id": "ChIJ3",
            "rating": null,
            "formatted_phone_number": null,
            "geometry": null,
            "types": null
        });
        let place: PlaceDetails = serde_json::from_value(json).unwrap();
        assert_eq!(place.rating, None);
        assert_eq!(place.formatted_phone_number, None);
        assert_eq!(place.geometry, None);
        assert!(place.types.is_empty());
    }
}
