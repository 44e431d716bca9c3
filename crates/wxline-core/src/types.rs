// File: crates/wxline-core/src/types.rs
// Summary: Shared types and constants (surface size, plot margins, measured plot area).

use serde::Deserialize;

/// Default host surface width in surface units.
pub const WIDTH: u32 = 640;
/// Default host surface height in surface units.
pub const HEIGHT: u32 = 360;
/// Share of the host height given to the chart; the rest is left for the host's controls.
pub const HEIGHT_FACTOR: f64 = 0.90;

/// Plot margins, in surface units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(25, 10, 10, 15)
    }
}

/// Measured drawing area inside the margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Measure the plot area of a `surface_w` x `surface_h` host.
    ///
    /// Negative results (host smaller than its margins) clamp to zero.
    pub fn measure(surface_w: f64, surface_h: f64, insets: &Insets, height_factor: f64) -> Self {
        let width = surface_w - insets.hsum() as f64;
        let height = surface_h * height_factor - insets.vsum() as f64;
        Self { width: width.max(0.0), height: height.max(0.0) }
    }
}
