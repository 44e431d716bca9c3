// File: crates/wxline-core/tests/dataset.rs
// Purpose: Dataset loading from JSON and CSV, including rejected documents.

use wxline_core::{Dataset, DatasetError, FieldSelector};

#[test]
fn json_fixture_loads_with_nulls() {
    let ds = Dataset::from_json_str(include_str!("fixtures/two_days.json")).expect("parses");
    assert_eq!(ds.location_name, "Seattle");
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.observations[1].dewpoint, None);
    assert_eq!(ds.observations[1].value(FieldSelector::Visibility), Some(18.0));
}

#[test]
fn missing_readings_load_as_absent() {
    let json = r#"{ "locationName": "Oslo", "observations": [ { "time": "2023-01-01T06:00:00+01:00", "temperature": -3.5 } ] }"#;
    let ds = Dataset::from_json_str(json).expect("parses");
    let obs = &ds.observations[0];
    assert_eq!(obs.temperature, Some(-3.5));
    assert_eq!(obs.visibility, None);
    assert_eq!(obs.time.to_rfc3339(), "2023-01-01T05:00:00+00:00");
}

#[test]
fn malformed_timestamp_is_rejected() {
    let json = r#"{ "locationName": "X", "observations": [ { "time": "yesterday", "temperature": 1 } ] }"#;
    assert!(matches!(Dataset::from_json_str(json), Err(DatasetError::Json(_))));
}

#[test]
fn non_numeric_reading_is_rejected() {
    let json = r#"{ "locationName": "X", "observations": [ { "time": "2023-01-01T00:00:00Z", "temperature": "warm" } ] }"#;
    assert!(Dataset::from_json_str(json).is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = Dataset::from_json_path("does/not/exist.json").expect_err("missing file");
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn csv_empty_cells_are_absent() {
    let csv = "time,temperature,dewpoint,visibility\n\
               2023-01-01T00:00:00Z,10,,20\n\
               2023-01-02T00:00:00Z, 12 ,4.5,\n";
    let ds = Dataset::from_csv_reader("Boise", csv.as_bytes()).expect("parses");
    assert_eq!(ds.location_name, "Boise");
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.observations[0].dewpoint, None);
    assert_eq!(ds.observations[1].temperature, Some(12.0));
    assert_eq!(ds.observations[1].visibility, None);
}

#[test]
fn csv_non_finite_readings_are_rejected() {
    for cell in ["inf", "-inf", "NaN"] {
        let csv = format!(
            "time,temperature,dewpoint,visibility\n\
             2023-01-01T00:00:00Z,10,,\n\
             2023-01-01T01:00:00Z,{cell},,\n"
        );
        let res = Dataset::from_csv_reader("Boise", csv.as_bytes());
        assert!(matches!(res, Err(DatasetError::Csv(_))), "{cell} should be rejected");
    }
}
