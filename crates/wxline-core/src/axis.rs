// File: crates/wxline-core/src/axis.rs
// Summary: Axis model (orientation + ticks) and its SVG group markup.

use crate::scale::ScaleTransform;
use crate::surface::{fmt_num, DrawingSurface, NodeId};
use crate::theme::Rgba;
use crate::ticks::Tick;

/// Length of the tick marks and the domain end caps.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Upper bound on the requested tick count of either axis.
pub const MAX_TICK_COUNT: usize = 100;
/// Default number of ticks requested from a scale.
pub const TICK_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// Ticks of one scale, ready to draw on either backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    /// Range endpoints of the scale, in plot units.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new<S: ScaleTransform>(orient: Orient, scale: &S, tick_count: usize) -> Self {
        Self { orient, range: scale.range(), ticks: scale.ticks(tick_count) }
    }

    pub fn bottom<S: ScaleTransform>(scale: &S, tick_count: usize) -> Self {
        Self::new(Orient::Bottom, scale, tick_count)
    }

    pub fn left<S: ScaleTransform>(scale: &S, tick_count: usize) -> Self {
        Self::new(Orient::Left, scale, tick_count)
    }

    /// Path data of the domain line with outer end caps.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        let (s, a, b) = (TICK_SIZE, r0 + 0.5, r1 + 0.5);
        match self.orient {
            Orient::Bottom => format!("M{},{}V0.5H{}V{}", fmt_num(a), fmt_num(s), fmt_num(b), fmt_num(s)),
            Orient::Left => format!("M{},{}H0.5V{}H{}", fmt_num(-s), fmt_num(a), fmt_num(b), fmt_num(-s)),
        }
    }

    /// Append this axis' markup into `group`; lines use `color`, tick labels `label_color`.
    pub fn draw<S: DrawingSurface>(
        &self,
        surface: &mut S,
        group: NodeId,
        color: Rgba,
        label_color: Rgba,
    ) {
        let stroke = color.to_css();
        let label_fill = label_color.to_css();
        surface.set_attr(group, "fill", "none");
        surface.set_attr(group, "font-size", "10");
        surface.set_attr(group, "font-family", "sans-serif");
        surface.set_attr(
            group,
            "text-anchor",
            match self.orient { Orient::Bottom => "middle", Orient::Left => "end" },
        );

        let domain = surface.append(group, "path");
        surface.set_attr(domain, "class", "domain");
        surface.set_attr(domain, "stroke", stroke.clone());
        surface.set_attr(domain, "d", self.domain_path());

        for tick in &self.ticks {
            let g = surface.append(group, "g");
            surface.set_attr(g, "class", "tick");
            surface.set_attr(g, "opacity", "1");
            let line = surface.append(g, "line");
            surface.set_attr(line, "stroke", stroke.clone());
            let text = surface.append(g, "text");
            surface.set_attr(text, "fill", label_fill.clone());
            // Half-pixel offset keeps one-unit strokes crisp.
            let at = fmt_num(tick.offset + 0.5);
            match self.orient {
                Orient::Bottom => {
                    surface.set_attr(g, "transform", format!("translate({at},0)"));
                    surface.set_attr(line, "y2", fmt_num(TICK_SIZE));
                    surface.set_attr(text, "y", fmt_num(TICK_SIZE + TICK_PADDING));
                    surface.set_attr(text, "dy", "0.71em");
                }
                Orient::Left => {
                    surface.set_attr(g, "transform", format!("translate(0,{at})"));
                    surface.set_attr(line, "x2", fmt_num(-TICK_SIZE));
                    surface.set_attr(text, "x", fmt_num(-(TICK_SIZE + TICK_PADDING)));
                    surface.set_attr(text, "dy", "0.32em");
                }
            }
            surface.set_text(text, tick.label.clone());
        }
    }
}
