use super::filter::{filter_by_site, filter_by_site_and_payload, PayloadRange, SiteSelection};
use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Pie aggregation
// ---------------------------------------------------------------------------

/// Success / failure tallies for a subset of launches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub success: usize,
    pub failure: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.success + self.failure
    }

    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Failure => self.failure,
        }
    }

    fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::Failure => self.failure += 1,
        }
    }
}

/// Everything the pie chart needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub counts: OutcomeCounts,
}

/// Count outcomes for the selected site (or the whole dataset).
///
/// An unknown site yields zero counts.
pub fn render_pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    let mut counts = OutcomeCounts::default();
    for rec in filter_by_site(dataset, site) {
        counts.add(rec.outcome);
    }
    PieChart {
        title: format!("Success vs. Failure Count for {}", site.label()),
        counts,
    }
}

// ---------------------------------------------------------------------------
// Scatter projection
// ---------------------------------------------------------------------------

/// One projected launch: payload, outcome and booster category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

/// Everything the scatter chart needs. Point order carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

/// Project launches inside `range` (inclusive) at the selected site.
pub fn render_scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let points = filter_by_site_and_payload(dataset, site, range)
        .map(|rec| ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            outcome: rec.outcome,
            booster_version_category: rec.booster_version_category.clone(),
        })
        .collect();

    ScatterChart {
        title: format!("Payload vs. Outcome for {}", site.label()),
        points,
    }
}
