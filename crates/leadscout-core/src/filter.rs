//! Lead qualification against distance, phone, rating, and review thresholds.
//!
//! Each lead is checked against [`RULES`] in order. The first rule that
//! fails determines the single [`ExclusionReason`]; later rules are not
//! evaluated. Absent ratings and review counts never disqualify a lead.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::lead::CanonicalLead;

/// Thresholds applied by [`filter_leads`].
///
/// `rating_min <= rating_max` and `review_min <= review_max` are the caller's
/// responsibility. Inverted bounds simply exclude every lead that carries the
/// corresponding value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub radius_km: f64,
    pub rating_min: f64,
    pub rating_max: f64,
    pub review_min: u32,
    pub review_max: u32,
    pub require_phone: bool,
}

/// Why a lead did not qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    MissingLocation,
    OutsideRadius,
    MissingPhone,
    RatingOutOfRange,
    ReviewCountOutOfRange,
}

impl ExclusionReason {
    /// Every reason, in evaluation order.
    pub const ALL: [ExclusionReason; 5] = [
        ExclusionReason::MissingLocation,
        ExclusionReason::OutsideRadius,
        ExclusionReason::MissingPhone,
        ExclusionReason::RatingOutOfRange,
        ExclusionReason::ReviewCountOutOfRange,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExclusionReason::MissingLocation => "missing_location",
            ExclusionReason::OutsideRadius => "outside_radius",
            ExclusionReason::MissingPhone => "missing_phone",
            ExclusionReason::RatingOutOfRange => "rating_out_of_range",
            ExclusionReason::ReviewCountOutOfRange => "review_count_out_of_range",
        }
    }
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lead that failed a rule, paired with the first rule it failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedLead {
    pub lead: CanonicalLead,
    pub reason: ExclusionReason,
}

/// Partition of the input leads. Both groups keep input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    pub qualified: Vec<CanonicalLead>,
    pub excluded: Vec<ExcludedLead>,
}

impl FilterResult {
    /// Number of excluded leads carrying `reason`.
    #[must_use]
    pub fn count_for(&self, reason: ExclusionReason) -> usize {
        self.excluded.iter().filter(|e| e.reason == reason).count()
    }
}

/// Returns `true` when the lead fails the rule.
type Rule = fn(&CanonicalLead, &GeoPoint, &FilterConfig) -> bool;

const RULES: [(ExclusionReason, Rule); 5] = [
    (ExclusionReason::MissingLocation, missing_location),
    (ExclusionReason::OutsideRadius, outside_radius),
    (ExclusionReason::MissingPhone, missing_phone),
    (ExclusionReason::RatingOutOfRange, rating_out_of_range),
    (ExclusionReason::ReviewCountOutOfRange, review_count_out_of_range),
];

fn missing_location(lead: &CanonicalLead, _: &GeoPoint, _: &FilterConfig) -> bool {
    lead.location.is_none()
}

fn outside_radius(lead: &CanonicalLead, reference: &GeoPoint, config: &FilterConfig) -> bool {
    lead.location
        .is_some_and(|location| reference.distance_km(&location) > config.radius_km)
}

fn missing_phone(lead: &CanonicalLead, _: &GeoPoint, config: &FilterConfig) -> bool {
    config.require_phone && lead.phone.is_none()
}

fn rating_out_of_range(lead: &CanonicalLead, _: &GeoPoint, config: &FilterConfig) -> bool {
    lead.rating
        .is_some_and(|rating| rating < config.rating_min || rating > config.rating_max)
}

fn review_count_out_of_range(lead: &CanonicalLead, _: &GeoPoint, config: &FilterConfig) -> bool {
    lead.review_count
        .is_some_and(|count| count < config.review_min || count > config.review_max)
}

/// The first rule `lead` fails, or `None` when it qualifies.
#[must_use]
pub fn exclusion_reason(
    lead: &CanonicalLead,
    reference: &GeoPoint,
    config: &FilterConfig,
) -> Option<ExclusionReason> {
    RULES
        .iter()
        .find(|(_, fails)| fails(lead, reference, config))
        .map(|(reason, _)| *reason)
}

/// Split `leads` into qualified and excluded groups relative to `reference`.
///
/// Every input lead lands in exactly one group, in its original relative
/// order.
pub fn filter_leads<I>(leads: I, reference: &GeoPoint, config: &FilterConfig) -> FilterResult
where
    I: IntoIterator<Item = CanonicalLead>,
{
    let mut result = FilterResult::default();

    for lead in leads {
        match exclusion_reason(&lead, reference, config) {
            Some(reason) => {
                tracing::debug!(id = %lead.id, name = %lead.name, %reason, "lead excluded");
                result.excluded.push(ExcludedLead { lead, reason });
            }
            None => result.qualified.push(lead),
        }
    }

    tracing::info!(
        qualified = result.qualified.len(),
        excluded = result.excluded.len(),
        "filtering complete"
    );

    result
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
