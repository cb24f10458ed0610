//! Integration tests for `discover_nearby` and normalization of its output.

use leadscout_core::{filter_leads, ExclusionReason, FilterConfig, GeoPoint};
use leadscout_places::{
    discover_nearby, normalize_place, NearbySearchRequest, PlacesClient, RawPlace,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OFFICE: GeoPoint = GeoPoint::new(49.2026, -122.9106);

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "leadscout-test", base_url)
        .expect("client construction should not fail")
}

fn request() -> NearbySearchRequest {
    NearbySearchRequest {
        location: OFFICE,
        radius_meters: 5000,
        place_type: "restaurant".to_string(),
        language: "en".to_string(),
    }
}

async fn mount_nearby(server: &MockServer) {
    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "ChIJ-a",
                "name": "Close Cafe",
                "rating": 4.5,
                "user_ratings_total": 200,
                "vicinity": "1 Front St",
                "geometry": { "location": { "lat": 49.2040, "lng": -122.9100 } },
                "types": ["cafe"]
            },
            {
                "place_id": "ChIJ-b",
                "name": "Broken Details Bistro",
                "geometry": { "location": { "lat": 49.2030, "lng": -122.9110 } }
            },
            {
                "name": "Nameless Id Diner"
            },
            {
                "place_id": "ChIJ-c",
                "name": "Far Away Grill",
                "rating": 4.9,
                "user_ratings_total": 50,
                "geometry": { "location": { "lat": 49.3500, "lng": -122.9106 } }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

async fn mount_details(server: &MockServer, place_id: &str, result: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", place_id))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "OK", "result": result })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn summaries_only_when_details_disabled() {
    let server = MockServer::start().await;
    mount_nearby(&server).await;

    let client = test_client(&server.uri());
    let raw = discover_nearby(&client, &request(), false).await.unwrap();

    assert_eq!(raw.len(), 4);
    assert!(raw.iter().all(|r| !r.is_detailed()));

    let leads: Vec<_> = raw.iter().map(normalize_place).collect();
    assert_eq!(leads[0].address.as_deref(), Some("1 Front St"));
    assert!(leads.iter().all(|l| l.phone.is_none() && l.website.is_none()));
    assert_eq!(leads[2].id, "");
}

#[tokio::test]
async fn failed_detail_fetches_are_dropped() {
    let server = MockServer::start().await;
    mount_nearby(&server).await;

    mount_details(
        &server,
        "ChIJ-a",
        serde_json::json!({
            "place_id": "ChIJ-a",
            "name": "Close Cafe",
            "rating": 4.5,
            "user_ratings_total": 200,
            "formatted_address": "1 Front St, New Westminster, BC",
            "formatted_phone_number": "(604) 555-0101",
            "geometry": { "location": { "lat": 49.2040, "lng": -122.9100 } },
            "types": ["cafe"]
        }),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "ChIJ-b"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    mount_details(
        &server,
        "ChIJ-c",
        serde_json::json!({
            "place_id": "ChIJ-c",
            "name": "Far Away Grill",
            "rating": 4.9,
            "user_ratings_total": 50,
            "formatted_phone_number": "(604) 555-0199",
            "geometry": { "location": { "lat": 49.3500, "lng": -122.9106 } }
        }),
    )
    .await;

    let client = test_client(&server.uri());
    let raw = discover_nearby(&client, &request(), true).await.unwrap();

    assert_eq!(raw.len(), 2);
    assert!(raw.iter().all(RawPlace::is_detailed));

    let leads: Vec<_> = raw.iter().map(normalize_place).collect();
    assert_eq!(leads[0].id, "ChIJ-a");
    assert_eq!(leads[0].phone.as_deref(), Some("(604) 555-0101"));
    assert_eq!(leads[1].id, "ChIJ-c");

    let config = FilterConfig {
        radius_km: 5.0,
        rating_min: 4.0,
        rating_max: 5.0,
        review_min: 10,
        review_max: 1000,
        require_phone: true,
    };
    let result = filter_leads(leads, &OFFICE, &config);
    assert_eq!(result.qualified.len(), 1);
    assert_eq!(result.qualified[0].id, "ChIJ-a");
    assert_eq!(result.excluded.len(), 1);
    assert_eq!(result.excluded[0].reason, ExclusionReason::OutsideRadius);
}

#[tokio::test]
async fn nearby_failure_fails_discovery() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OVER_QUERY_LIMIT",
            "error_message": "You have exceeded your daily request quota for this API."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = discover_nearby(&client, &request(), true).await;
    assert!(result.is_err());
}
