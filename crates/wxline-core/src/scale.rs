// File: crates/wxline-core/src/scale.rs
// Summary: Time (X) and value (Y) scales mapping a projected series onto the plot area.

use chrono::{DateTime, Utc};

use crate::series::ProjectedSeries;
use crate::ticks::{self, Tick};
use crate::types::PlotArea;

/// Domain-to-range mapping shared by both axes.
pub trait ScaleTransform {
    type Value: Copy;

    /// Map a domain value to range units.
    fn apply(&self, v: Self::Value) -> f64;
    /// Range endpoints as given at construction (may be inverted).
    fn range(&self) -> (f64, f64);
    /// About `count` labelled ticks across the domain.
    fn ticks(&self, count: usize) -> Vec<Tick>;
}

#[inline]
fn interpolate(r0: f64, r1: f64, t: f64) -> f64 {
    r0 * (1.0 - t) + r1 * t
}

/// Normalized position of `v` in [d0, d1]. A zero-width domain puts everything in the middle.
#[inline]
fn normalize(d0: f64, d1: f64, v: f64) -> f64 {
    let span = d1 - d0;
    if span.is_nan() {
        f64::NAN
    } else if span == 0.0 {
        0.5
    } else {
        (v - d0) / span
    }
}

/// Linear value scale, e.g. temperature to vertical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn tick_values(&self, count: usize) -> Vec<f64> {
        ticks::linear_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleTransform for LinearScale {
    type Value = f64;

    #[inline]
    fn apply(&self, v: f64) -> f64 {
        interpolate(self.range.0, self.range.1, normalize(self.domain.0, self.domain.1, v))
    }

    fn range(&self) -> (f64, f64) { self.range }

    fn ticks(&self, count: usize) -> Vec<Tick> {
        let step = ticks::tick_step(self.domain.0, self.domain.1, count);
        self.tick_values(count)
            .into_iter()
            .map(|v| Tick { offset: self.apply(v), label: ticks::format_linear(v, step) })
            .collect()
    }
}

/// Linear-in-time scale over UTC instants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (DateTime<Utc>, DateTime<Utc>),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn tick_values(&self, count: usize) -> Vec<DateTime<Utc>> {
        ticks::time_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleTransform for TimeScale {
    type Value = DateTime<Utc>;

    #[inline]
    fn apply(&self, t: DateTime<Utc>) -> f64 {
        let d0 = self.domain.0.timestamp_millis() as f64;
        let d1 = self.domain.1.timestamp_millis() as f64;
        let v = t.timestamp_millis() as f64;
        interpolate(self.range.0, self.range.1, normalize(d0, d1, v))
    }

    fn range(&self) -> (f64, f64) { self.range }

    fn ticks(&self, count: usize) -> Vec<Tick> {
        self.tick_values(count)
            .into_iter()
            .map(|t| Tick { offset: self.apply(t), label: ticks::format_time(t) })
            .collect()
    }
}

/// Vertical domain for a value extent: the low end drops by one unit unless the extent is flat.
pub fn value_domain(min: f64, max: f64) -> (f64, f64) {
    let adjustment = if min != max { 1.0 } else { 0.0 };
    (min - adjustment, max)
}

/// Both scales used to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x: TimeScale,
    pub y: LinearScale,
}

impl ChartScales {
    /// Fit scales to `series` inside `area`; `None` when the series is empty.
    pub fn fit(series: &ProjectedSeries, area: PlotArea) -> Option<Self> {
        let time = series.time_extent()?;
        let (vmin, vmax) = series.value_extent()?;
        Some(Self {
            x: TimeScale::new(time, (0.0, area.width)),
            y: LinearScale::new(value_domain(vmin, vmax), (area.height, 0.0)),
        })
    }

    /// Plot coordinates of one point.
    #[inline]
    pub fn project(&self, time: DateTime<Utc>, value: f64) -> (f64, f64) {
        (self.x.apply(time), self.y.apply(value))
    }
}
