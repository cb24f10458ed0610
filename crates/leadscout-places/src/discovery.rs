//! Nearby discovery: one search, then optional best-effort detail lookups.

use crate::client::{NearbySearchRequest, PlacesClient};
use crate::error::PlacesError;
use crate::normalize::RawPlace;

/// Discover places around `request.location`.
///
/// With `include_details` off, every Nearby Search result is returned as a
/// [`RawPlace::Summary`]. With it on, details are fetched sequentially, once
/// per result; a failed or empty lookup drops that record, so the output may
/// be shorter than the search result.
///
/// # Errors
///
/// Returns [`PlacesError`] only when the Nearby Search itself fails.
/// Per-place detail failures are logged and skipped.
pub async fn discover_nearby(
    client: &PlacesClient,
    request: &NearbySearchRequest,
    include_details: bool,
) -> Result<Vec<RawPlace>, PlacesError> {
    tracing::info!(
        place_type = %request.place_type,
        radius_meters = request.radius_meters,
        location = %request.location,
        "requesting nearby places"
    );

    let places = client.nearby_search(request).await?;
    tracing::info!(count = places.len(), "nearby search returned places");

    if !include_details {
        return Ok(places.into_iter().map(RawPlace::Summary).collect());
    }

    let mut detailed = Vec::with_capacity(places.len());
    for place in &places {
        let Some(place_id) = place.place_id.as_deref() else {
            tracing::warn!(
                name = place.name.as_deref().unwrap_or_default(),
                "skipping place without place_id"
            );
            continue;
        };

        match client.place_details(place_id, &request.language).await {
            Ok(Some(details)) => detailed.push(RawPlace::Detailed(details)),
            Ok(None) => {
                tracing::warn!(place_id, "no details returned for place");
            }
            Err(error) => {
                tracing::warn!(place_id, %error, "failed to fetch details for place");
            }
        }
    }

    tracing::info!(
        requested = places.len(),
        fetched = detailed.len(),
        "place details fetched"
    );

    Ok(detailed)
}
