// File: crates/wxline-core/src/line.rs
// Summary: Line path generation for a projected series.

use std::fmt::Write as _;

use crate::scale::ChartScales;
use crate::series::ProjectedSeries;
use crate::surface::fmt_num;

/// Plot coordinates of every point, in series order.
pub fn line_points(series: &ProjectedSeries, scales: &ChartScales) -> Vec<(f64, f64)> {
    series.iter().map(|p| scales.project(p.time, p.value)).collect()
}

/// SVG path data visiting each point in order: `M x,y L x,y ...`.
/// Empty when there is nothing to draw.
pub fn line_path(series: &ProjectedSeries, scales: Option<&ChartScales>) -> String {
    let Some(scales) = scales else { return String::new() };
    let mut d = String::new();
    for (i, (x, y)) in line_points(series, scales).into_iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{},{}", fmt_num(x), fmt_num(y));
    }
    d
}
