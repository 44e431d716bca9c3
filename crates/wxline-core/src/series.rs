// File: crates/wxline-core/src/series.rs
// Summary: Projection of a dataset onto one field as an ordered (time, value) series.

use chrono::{DateTime, Utc};

use crate::dataset::Dataset;
use crate::field::FieldSelector;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl ProjectedPoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }
}

/// Points of one field in dataset order. Rebuilt from scratch on every refresh.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectedSeries {
    pub field: FieldSelector,
    pub points: Vec<ProjectedPoint>,
}

impl ProjectedSeries {
    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectedPoint> {
        self.points.iter()
    }

    /// [earliest, latest] timestamp, or `None` for an empty series.
    pub fn time_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let mut it = self.points.iter().map(|p| p.time);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }

    /// [min, max] value, or `None` for an empty series.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut it = self.points.iter().map(|p| p.value);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Project `dataset` onto `field`, dropping observations where the reading is absent.
pub fn project(dataset: &Dataset, field: FieldSelector) -> ProjectedSeries {
    let points = dataset
        .observations
        .iter()
        .filter_map(|obs| obs.value(field).map(|v| ProjectedPoint::new(obs.time, v)))
        .collect::<Vec<_>>();
    tracing::trace!(%field, points = points.len(), dropped = dataset.len() - points.len(), "projected series");
    ProjectedSeries { field, points }
}

/// Owns the active field and derives its series from a dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChartDataProjector {
    field: FieldSelector,
}

impl ChartDataProjector {
    pub fn new(initial: FieldSelector) -> Self {
        Self { field: initial }
    }

    pub fn field(&self) -> FieldSelector { self.field }

    /// Move to the next field (wrapping) and return it.
    pub fn advance(&mut self) -> FieldSelector {
        self.field = self.field.advance();
        self.field
    }

    pub fn project(&self, dataset: &Dataset) -> ProjectedSeries {
        project(dataset, self.field)
    }
}
