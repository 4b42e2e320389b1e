use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as recorded in the `class` column (0 = failure, 1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map a raw class value; anything other than 0/1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric class, used as the scatter y coordinate.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Always ≥ 0; enforced by the loader.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed derived columns.
///
/// Built once and only ever read afterwards; a reload produces a new value.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct sites in order of first appearance.
    launch_sites: Vec<String>,
    booster_categories: BTreeSet<String>,
    payload_bounds: Option<(f64, f64)>,
}

impl LaunchDataset {
    /// Build derived columns from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut launch_sites: Vec<String> = Vec::new();
        let mut booster_categories = BTreeSet::new();
        let mut payload_bounds: Option<(f64, f64)> = None;

        for rec in &records {
            if !launch_sites.iter().any(|s| s == &rec.launch_site) {
                launch_sites.push(rec.launch_site.clone());
            }
            booster_categories.insert(rec.booster_version_category.clone());

            let mass = rec.payload_mass_kg;
            payload_bounds = Some(match payload_bounds {
                Some((lo, hi)) => (lo.min(mass), hi.max(mass)),
                None => (mass, mass),
            });
        }

        LaunchDataset {
            records,
            launch_sites,
            booster_categories,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites, in the order they first appear in the file.
    pub fn launch_sites(&self) -> &[String] {
        &self.launch_sites
    }

    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    /// `(min, max)` payload mass, or `None` for an empty dataset.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.payload_bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
    LaunchRecord {
        launch_site: site.to_string(),
        payload_mass_kg: payload,
        outcome: Outcome::from_class(class).expect("test class must be 0 or 1"),
        booster_version_category: booster.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_columns() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 5300.0, 1, "FT"),
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("KSC LC-39A", 9600.0, 1, "B5"),
            record("VAFB SLC-4E", 500.0, 0, "v1.1"),
        ]);

        assert_eq!(ds.len(), 4);
        assert_eq!(
            ds.launch_sites(),
            &["KSC LC-39A", "CCAFS LC-40", "VAFB SLC-4E"]
        );
        assert_eq!(ds.payload_bounds(), Some((0.0, 9600.0)));
        let boosters: Vec<&str> = ds.booster_categories().iter().map(String::as_str).collect();
        assert_eq!(boosters, vec!["B5", "FT", "v1.0", "v1.1"]);
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds(), None);
        assert!(ds.launch_sites().is_empty());
    }

    #[test]
    fn outcome_class_mapping() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
    }
}
