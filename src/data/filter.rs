use std::fmt;

use super::model::{LaunchDataset, LaunchRecord};

/// Dropdown value meaning "no site filter".
pub const ALL_SITES_VALUE: &str = "ALL";

// ---------------------------------------------------------------------------
// Site selection
// ---------------------------------------------------------------------------

/// Which launch site the charts are restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// The dropdown value this selection corresponds to.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES_VALUE,
            SiteSelection::Site(name) => name,
        }
    }

    /// Human-readable label, also used in chart titles.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::AllSites => "All Sites",
            SiteSelection::Site(name) => name,
        }
    }

    /// Whether a record passes this site filter.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Inclusive payload mass interval in kilograms. Always `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range; reversed bounds are swapped rather than rejected.
    pub fn new(low: f64, high: f64) -> Self {
        if low > high {
            PayloadRange {
                low: high,
                high: low,
            }
        } else {
            PayloadRange { low, high }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive on both ends.
    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

// ---------------------------------------------------------------------------
// Row filtering
// ---------------------------------------------------------------------------

/// Records matching the site selection.
pub fn filter_by_site<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset.records().iter().filter(move |r| site.matches(r))
}

/// Records whose payload lies in `range` and that match the site selection.
pub fn filter_by_site_and_payload<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |r| range.contains(r.payload_mass_kg) && site.matches(r))
}
