// File: crates/wxline-core/tests/projection.rs
// Purpose: Projection keeps dataset order, drops absent readings, and cycles fields.

use chrono::{DateTime, Utc};
use wxline_core::{advance, project, ChartDataProjector, Dataset, FieldSelector, Observation};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid timestamp")
}

fn two_days() -> Dataset {
    Dataset::from_json_str(include_str!("fixtures/two_days.json")).expect("fixture parses")
}

#[test]
fn end_to_end_temperature_then_dewpoint() {
    let dataset = two_days();
    let mut projector = ChartDataProjector::new(FieldSelector::Temperature);

    let temps = projector.project(&dataset);
    let got = temps.iter().map(|p| (p.time, p.value)).collect::<Vec<_>>();
    assert_eq!(got, vec![(ts("2023-01-01T00:00:00Z"), 10.0), (ts("2023-01-02T00:00:00Z"), 12.0)]);

    assert_eq!(projector.advance(), FieldSelector::Dewpoint);
    let dew = projector.project(&dataset);
    let got = dew.iter().map(|p| (p.time, p.value)).collect::<Vec<_>>();
    assert_eq!(got, vec![(ts("2023-01-01T00:00:00Z"), 5.0)]);
    assert_eq!(dew.field, FieldSelector::Dewpoint);
}

#[test]
fn absent_readings_are_dropped_in_order() {
    let obs = vec![
        Observation::new(ts("2023-03-01T03:00:00Z"), Some(1.0), None, None),
        Observation::new(ts("2023-03-01T01:00:00Z"), None, None, Some(9.0)),
        Observation::new(ts("2023-03-01T02:00:00Z"), Some(-4.5), Some(-8.0), None),
    ];
    let dataset = Dataset::new("x", obs);

    let temps = project(&dataset, FieldSelector::Temperature);
    let values = temps.iter().map(|p| p.value).collect::<Vec<_>>();
    assert_eq!(values, vec![1.0, -4.5]);

    let vis = project(&dataset, FieldSelector::Visibility);
    assert_eq!(vis.len(), 1);
    assert_eq!(vis.points[0].time, ts("2023-03-01T01:00:00Z"));

    for field in FieldSelector::ALL {
        assert!(project(&dataset, field).len() <= dataset.len());
    }
}

#[test]
fn empty_dataset_projects_empty_series() {
    let dataset = Dataset::new("Nowhere", Vec::new());
    for field in FieldSelector::ALL {
        let series = project(&dataset, field);
        assert!(series.is_empty());
        assert_eq!(series.time_extent(), None);
        assert_eq!(series.value_extent(), None);
    }
}

#[test]
fn projection_is_deterministic() {
    let dataset = two_days();
    assert_eq!(project(&dataset, FieldSelector::Visibility), project(&dataset, FieldSelector::Visibility));
}

#[test]
fn extents_cover_min_and_max() {
    let obs = vec![
        Observation::new(ts("2023-01-02T00:00:00Z"), Some(7.0), None, None),
        Observation::new(ts("2023-01-01T00:00:00Z"), Some(3.0), None, None),
        Observation::new(ts("2023-01-03T00:00:00Z"), Some(5.0), None, None),
    ];
    let series = project(&Dataset::new("x", obs), FieldSelector::Temperature);
    assert_eq!(series.value_extent(), Some((3.0, 7.0)));
    assert_eq!(
        series.time_extent(),
        Some((ts("2023-01-01T00:00:00Z"), ts("2023-01-03T00:00:00Z")))
    );
}

#[test]
fn advance_cycles_with_period_three() {
    assert_eq!(advance(FieldSelector::Temperature), FieldSelector::Dewpoint);
    assert_eq!(advance(FieldSelector::Dewpoint), FieldSelector::Visibility);
    assert_eq!(advance(FieldSelector::Visibility), FieldSelector::Temperature);
    for f in FieldSelector::ALL {
        assert_eq!(advance(advance(advance(f))), f);
        assert_ne!(advance(f), f);
        assert_eq!(FieldSelector::from_index(f.index()), Some(f));
    }
}

#[test]
fn field_names_parse_case_insensitively() {
    assert_eq!("dewpoint".parse::<FieldSelector>().ok(), Some(FieldSelector::Dewpoint));
    assert_eq!(" VISIBILITY ".parse::<FieldSelector>().ok(), Some(FieldSelector::Visibility));
    assert!("pressure".parse::<FieldSelector>().is_err());
    assert_eq!(FieldSelector::Temperature.to_string(), "Temperature");
}
