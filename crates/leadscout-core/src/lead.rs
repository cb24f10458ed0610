use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A business record after normalization, independent of which places API
/// response shape it came from.
///
/// Every optional field is `None` when the source did not provide it. A
/// `review_count` of `Some(0)` is a real brand-new place, not an unknown one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalLead {
    pub id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub categories: Vec<String>,
}
