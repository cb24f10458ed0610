//! Run report rendering.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use leadscout_core::{CanonicalLead, ExcludedLead, ExclusionReason, FilterResult, GeoPoint};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Number of excluded leads for one reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct ReasonCount {
    pub reason: ExclusionReason,
    pub count: usize,
}

/// Everything a single run produced.
#[derive(Debug, Serialize)]
pub(crate) struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub office: GeoPoint,
    pub radius_km: f64,
    pub discovered: usize,
    /// Non-zero counts only, in rule evaluation order.
    pub reason_counts: Vec<ReasonCount>,
    pub qualified: Vec<CanonicalLead>,
    pub excluded: Vec<ExcludedLead>,
}

impl RunReport {
    pub(crate) fn new(
        office: GeoPoint,
        radius_km: f64,
        discovered: usize,
        result: FilterResult,
    ) -> Self {
        let reason_counts = ExclusionReason::ALL
            .into_iter()
            .map(|reason| ReasonCount {
                reason,
                count: result.count_for(reason),
            })
            .filter(|rc| rc.count > 0)
            .collect();

        Self {
            generated_at: Utc::now(),
            office,
            radius_km,
            discovered,
            reason_counts,
            qualified: result.qualified,
            excluded: result.excluded,
        }
    }

    /// Render in the requested format, always ending with a newline.
    pub(crate) fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(self)?)),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Discovered {} leads within {} km of {}\n",
            self.discovered, self.radius_km, self.office
        ));
        out.push_str(&format!("Qualified: {}\n", self.qualified.len()));
        out.push_str(&format!("Excluded: {}\n", self.excluded.len()));

        for ReasonCount { reason, count } in &self.reason_counts {
            out.push_str(&format!("  {reason}: {count}\n"));
        }

        if !self.qualified.is_empty() {
            out.push_str("\nQualified leads:\n");
            for lead in &self.qualified {
                out.push_str(&format!("  {}\n", describe(lead)));
            }
        }

        if !self.excluded.is_empty() {
            out.push_str("\nExcluded leads:\n");
            for excluded in &self.excluded {
                out.push_str(&format!(
                    "  {} [{}]\n",
                    describe(&excluded.lead),
                    excluded.reason
                ));
            }
        }

        out
    }
}

fn describe(lead: &CanonicalLead) -> String {
    let rating = lead
        .rating
        .map_or_else(|| "\u{2014}".to_string(), |r| format!("{r:.1}"));
    let reviews = lead
        .review_count
        .map_or_else(|| "\u{2014}".to_string(), |c| c.to_string());
    let phone = lead.phone.as_deref().unwrap_or("\u{2014}");
    format!(
        "{} ({}) rating {rating}, {reviews} reviews, phone {phone}",
        lead.name, lead.id
    )
}
