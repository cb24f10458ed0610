//! Google Places discovery for leadscout.
//!
//! [`PlacesClient`] talks to the Nearby Search and Place Details endpoints,
//! [`discover_nearby`] turns one search into raw records, and
//! [`normalize_place`] maps either record shape into a
//! [`leadscout_core::CanonicalLead`].

pub mod client;
pub mod discovery;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{NearbySearchRequest, PlacesClient};
pub use discovery::discover_nearby;
pub use error::PlacesError;
pub use normalize::{normalize_details, normalize_nearby, normalize_place, RawPlace};
pub use types::{NearbyPlace, PlaceDetails};
