//! Normalization of Places API records into [`CanonicalLead`].
//!
//! Never fails: missing, blank, or malformed fields become `None`. The
//! source record is borrowed and left untouched.

use leadscout_core::{CanonicalLead, GeoPoint};

use crate::types::{Geometry, NearbyPlace, PlaceDetails};

/// A raw place record tagged with the response shape it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPlace {
    /// Nearby Search result.
    Summary(NearbyPlace),
    /// Place Details result.
    Detailed(PlaceDetails),
}

impl RawPlace {
    #[must_use]
    pub fn is_detailed(&self) -> bool {
        matches!(self, RawPlace::Detailed(_))
    }
}

/// Converts either record shape into a [`CanonicalLead`].
#[must_use]
pub fn normalize_place(raw: &RawPlace) -> CanonicalLead {
    match raw {
        RawPlace::Summary(place) => normalize_nearby(place),
        RawPlace::Detailed(place) => normalize_details(place),
    }
}

/// Converts a Nearby Search result. Phone and website are always `None`;
/// `vicinity` stands in for the address.
#[must_use]
pub fn normalize_nearby(place: &NearbyPlace) -> CanonicalLead {
    CanonicalLead {
        id: place.place_id.clone().unwrap_or_default(),
        name: place.name.clone().unwrap_or_default(),
        rating: finite(place.rating),
        review_count: place.user_ratings_total,
        address: non_blank(place.vicinity.as_deref()),
        phone: None,
        website: None,
        location: location(place.geometry.as_ref()),
        categories: place.types.clone(),
    }
}

/// Converts a Place Details result.
#[must_use]
pub fn normalize_details(place: &PlaceDetails) -> CanonicalLead {
    CanonicalLead {
        id: place.place_id.clone().unwrap_or_default(),
        name: place.name.clone().unwrap_or_default(),
        rating: finite(place.rating),
        review_count: place.user_ratings_total,
        address: non_blank(place.formatted_address.as_deref()),
        phone: non_blank(place.formatted_phone_number.as_deref()),
        website: non_blank(place.website.as_deref()),
        location: location(place.geometry.as_ref()),
        categories: place.types.clone(),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Out-of-range coordinates are treated as no location at all.
fn location(geometry: Option<&Geometry>) -> Option<GeoPoint> {
    geometry
        .and_then(|g| g.location)
        .map(|ll| GeoPoint::new(ll.lat, ll.lng))
        .filter(GeoPoint::is_valid)
}
