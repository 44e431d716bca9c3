// File: crates/wxline-core/src/renderer.rs
// Summary: Draws the chart frame (plot group, watermark, axes, line) into a drawing surface.

use crate::axis::{Axis, MAX_TICK_COUNT};
use crate::chart::ChartOptions;
use crate::line::line_path;
use crate::scale::ChartScales;
use crate::series::ProjectedSeries;
use crate::surface::{fmt_num, DrawingSurface, NodeId};
use crate::theme::{self, Theme};
use crate::types::{Insets, PlotArea};

/// Owns the surface tree. Keeps no drawing state besides element handles;
/// scales are returned to the caller and passed back in.
pub struct ChartRenderer<S: DrawingSurface> {
    surface: S,
    plot: NodeId,
    watermark: NodeId,
    insets: Insets,
    area: PlotArea,
    theme: Theme,
    stroke_width: f64,
    tick_count: usize,
}

impl<S: DrawingSurface> ChartRenderer<S> {
    /// Measure `surface`, add the translated plot group and the `label` watermark.
    pub fn initialize(mut surface: S, label: &str, options: &ChartOptions) -> Self {
        let (w, h) = surface.size();
        let insets = options.insets;
        let area = PlotArea::measure(w, h, &insets, options.height_factor);
        let theme = theme::find(&options.theme);
        tracing::debug!(width = area.width, height = area.height, theme = theme.name, "initialize chart surface");

        let root = surface.root();
        if let Some(bg) = theme.background {
            let rect = surface.append(root, "rect");
            surface.set_attr(rect, "width", "100%");
            surface.set_attr(rect, "height", "100%");
            surface.set_attr(rect, "fill", bg.to_css());
        }

        let plot = surface.append(root, "g");
        surface.set_attr(
            plot,
            "transform",
            format!("translate({},{})", insets.left, insets.top),
        );

        let watermark = surface.append(plot, "text");
        surface.set_text(watermark, label);
        surface.set_attr(watermark, "y", "50%");
        surface.set_attr(watermark, "x", "40%");
        surface.set_attr(
            watermark,
            "style",
            format!("fill: {}; font-size: 2.3em; font-weight: bold;", theme.watermark.to_css()),
        );
        surface.set_attr(watermark, "alignment-baseline", "middle");
        surface.set_attr(watermark, "text-anchor", "middle");

        Self {
            surface,
            plot,
            watermark,
            insets,
            area,
            theme,
            stroke_width: options.stroke_width,
            tick_count: options.tick_count.min(MAX_TICK_COUNT),
        }
    }

    /// Fit scales to `series` and draw the bottom (time) and left (value) axes.
    /// An empty series draws nothing and yields `None`.
    pub fn draw_axes(&mut self, series: &ProjectedSeries) -> Option<ChartScales> {
        let Some(scales) = ChartScales::fit(series, self.area) else {
            tracing::debug!(field = %series.field, "empty series, axes skipped");
            return None;
        };
        tracing::debug!(field = %series.field, x_domain = ?scales.x.domain, y_domain = ?scales.y.domain, "draw axes");

        let x_group = self.surface.append(self.plot, "g");
        self.surface
            .set_attr(x_group, "transform", format!("translate(0,{})", fmt_num(self.area.height)));
        Axis::bottom(&scales.x, self.tick_count).draw(
            &mut self.surface,
            x_group,
            self.theme.axis,
            self.theme.axis_label,
        );

        let y_group = self.surface.append(self.plot, "g");
        self.surface.set_attr(y_group, "class", "axis axis--y");
        Axis::left(&scales.y, self.tick_count).draw(
            &mut self.surface,
            y_group,
            self.theme.axis,
            self.theme.axis_label,
        );

        Some(scales)
    }

    /// Append the series stroke. Without scales the path is empty.
    pub fn draw_line(&mut self, series: &ProjectedSeries, scales: Option<&ChartScales>) -> NodeId {
        tracing::debug!(field = %series.field, points = series.len(), "draw line");
        let path = self.surface.append(self.plot, "path");
        self.surface.set_attr(path, "fill", "none");
        self.surface.set_attr(path, "stroke", self.theme.line_stroke.to_css());
        self.surface.set_attr(path, "stroke-width", fmt_num(self.stroke_width));
        self.surface.set_attr(path, "stroke-linejoin", "round");
        self.surface.set_attr(path, "stroke-linecap", "round");
        self.surface.set_attr(path, "d", line_path(series, scales));
        path
    }

    /// Remove every group and path under the plot group; the watermark stays.
    pub fn clear(&mut self) {
        let groups = self.surface.select_all(self.plot, "g");
        let paths = self.surface.select_all(self.plot, "path");
        tracing::trace!(groups = groups.len(), paths = paths.len(), "clear chart");
        for id in groups.into_iter().chain(paths) {
            self.surface.remove(id);
        }
    }

    pub fn surface(&self) -> &S { &self.surface }

    pub fn into_surface(self) -> S { self.surface }

    pub fn plot_group(&self) -> NodeId { self.plot }

    pub fn watermark(&self) -> NodeId { self.watermark }

    pub fn area(&self) -> PlotArea { self.area }

    pub fn insets(&self) -> Insets { self.insets }

    pub fn theme(&self) -> &Theme { &self.theme }

    pub fn stroke_width(&self) -> f64 { self.stroke_width }

    pub fn tick_count(&self) -> usize { self.tick_count }
}
