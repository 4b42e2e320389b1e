use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a launch CSV could not be turned into a [`LaunchDataset`].
///
/// Row numbers are 1-based data rows (the header is not counted).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV row {row}: payload mass {value} kg is negative")]
    NegativePayload { row: usize, value: f64 },

    #[error("CSV row {row}: class {value} is neither 0 nor 1")]
    InvalidClass { row: usize, value: i64 },

    #[error("CSV row {row}: '{field}' is empty")]
    MissingField { row: usize, field: &'static str },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Columns we read; everything else in the file is ignored.
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// Load a launch dataset from a CSV file with a header row.
pub fn load_file(path: &Path) -> Result<LaunchDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_reader(file)
}

/// Load a launch dataset from any CSV source.
pub fn load_reader<R: Read>(reader: R) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|source| LoadError::Csv { row, source })?;
        records.push(validate(raw, row)?);
    }

    Ok(LaunchDataset::from_records(records))
}

fn validate(raw: RawLaunchRow, row: usize) -> Result<LaunchRecord, LoadError> {
    if raw.launch_site.is_empty() {
        return Err(LoadError::MissingField {
            row,
            field: "Launch Site",
        });
    }
    if raw.booster_version_category.is_empty() {
        return Err(LoadError::MissingField {
            row,
            field: "Booster Version Category",
        });
    }
    // `!(x >= 0)` also rejects NaN.
    if !(raw.payload_mass_kg >= 0.0) {
        return Err(LoadError::NegativePayload {
            row,
            value: raw.payload_mass_kg,
        });
    }
    let outcome = Outcome::from_class(raw.class).ok_or(LoadError::InvalidClass {
        row,
        value: raw.class,
    })?;

    Ok(LaunchRecord {
        launch_site: raw.launch_site,
        payload_mass_kg: raw.payload_mass_kg,
        outcome,
        booster_version_category: raw.booster_version_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    fn csv_with(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for r in rows {
            text.push('\n');
            text.push_str(r);
        }
        text
    }

    #[test]
    fn reads_named_columns_and_ignores_the_rest() {
        let text = csv_with(&[
            "0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0",
            "1,2,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1",
            "2,3,CCAFS LC-40,1,5300.0,F9 FT B1021.1,FT",
        ]);
        let ds = load_reader(text.as_bytes()).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.launch_sites(), &["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.payload_bounds(), Some((0.0, 5300.0)));

        let second = &ds.records()[1];
        assert_eq!(second.launch_site, "VAFB SLC-4E");
        assert_eq!(second.payload_mass_kg, 500.0);
        assert_eq!(second.outcome, Outcome::Success);
        assert_eq!(second.booster_version_category, "v1.1");
    }

    #[test]
    fn rejects_negative_payload() {
        let text = csv_with(&["0,1,CCAFS LC-40,1,-5.0,F9,v1.0"]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::NegativePayload { row: 1, .. }));
    }

    #[test]
    fn rejects_class_outside_zero_one() {
        let text = csv_with(&[
            "0,1,CCAFS LC-40,1,10.0,F9,v1.0",
            "1,2,CCAFS LC-40,2,10.0,F9,v1.0",
        ]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidClass { row: 2, value: 2 }));
    }

    #[test]
    fn rejects_empty_site() {
        let text = csv_with(&["0,1,,1,10.0,F9,v1.0"]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                field: "Launch Site",
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_booster_category() {
        let text = csv_with(&["0,1,CCAFS LC-40,1,10.0,F9,"]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                row: 1,
                field: "Booster Version Category",
            }
        ));
    }

    #[test]
    fn rejects_nan_payload() {
        let text = csv_with(&["0,1,CCAFS LC-40,1,NaN,F9,v1.0"]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        match err {
            LoadError::NegativePayload { row, value } => {
                assert_eq!(row, 1);
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unparseable_payload_is_a_csv_error() {
        let text = csv_with(&["0,1,CCAFS LC-40,1,heavy,F9,v1.0"]);
        let err = load_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv { row: 1, .. }));
    }

    #[test]
    fn missing_required_column_fails() {
        let text = "Launch Site,class,Payload Mass (kg)\nCCAFS LC-40,1,10.0";
        assert!(load_reader(text.as_bytes()).is_err());
    }

    #[test]
    fn header_only_file_is_empty_dataset() {
        let ds = load_reader(HEADER.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn load_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", csv_with(&["0,1,KSC LC-39A,1,2500.0,F9 FT,FT"])).unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.launch_sites(), &["KSC LC-39A"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
