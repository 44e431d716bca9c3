// File: crates/wxline-core/src/chart.rs
// Summary: Line chart component: options, per-refresh frame, and the refresh protocol.

use serde::Deserialize;

use crate::axis::TICK_COUNT;
use crate::dataset::Dataset;
use crate::field::FieldSelector;
use crate::renderer::ChartRenderer;
use crate::scale::ChartScales;
use crate::series::{ChartDataProjector, ProjectedSeries};
use crate::surface::{DrawingSurface, SvgDocument};
use crate::types::{Insets, HEIGHT_FACTOR};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub insets: Insets,
    /// Share of the surface height used for the chart.
    pub height_factor: f64,
    /// Field the projector starts on.
    pub initial_field: FieldSelector,
    /// Advance once before the first draw, so the first frame shows the field
    /// after `initial_field`. Off by default.
    pub advance_on_init: bool,
    /// Theme preset name, see [`crate::theme::presets`].
    pub theme: String,
    pub stroke_width: f64,
    pub tick_count: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            height_factor: HEIGHT_FACTOR,
            initial_field: FieldSelector::Temperature,
            advance_on_init: false,
            theme: "classic".to_string(),
            stroke_width: 1.5,
            tick_count: TICK_COUNT,
        }
    }
}

/// What the last refresh drew: the series and the scales it was drawn with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartFrame {
    pub series: ProjectedSeries,
    /// `None` when the series is empty.
    pub scales: Option<ChartScales>,
}

impl ChartFrame {
    pub fn field(&self) -> FieldSelector { self.series.field }
}

/// Single-series weather chart bound to one drawing surface.
pub struct LineChart<S: DrawingSurface = SvgDocument> {
    dataset: Dataset,
    label: String,
    projector: ChartDataProjector,
    renderer: ChartRenderer<S>,
    frame: ChartFrame,
}

impl<S: DrawingSurface> LineChart<S> {
    /// Build the static frame on `surface` and draw the first field.
    pub fn initialize(surface: S, dataset: Dataset, options: ChartOptions) -> Self {
        let label = dataset.location_name.to_uppercase();
        let renderer = ChartRenderer::initialize(surface, &label, &options);
        let projector = ChartDataProjector::new(options.initial_field);
        tracing::debug!(location = %label, observations = dataset.len(), "chart setup");
        let mut chart = Self { dataset, label, projector, renderer, frame: ChartFrame::default() };
        if options.advance_on_init {
            chart.refresh();
        } else {
            chart.redraw();
        }
        chart
    }

    /// Advance to the next field and redraw axes and line.
    pub fn refresh(&mut self) {
        let field = self.projector.advance();
        tracing::debug!(%field, "refresh");
        self.redraw();
    }

    fn redraw(&mut self) {
        self.renderer.clear();
        let series = self.projector.project(&self.dataset);
        let scales = self.renderer.draw_axes(&series);
        self.renderer.draw_line(&series, scales.as_ref());
        self.frame = ChartFrame { series, scales };
    }

    pub fn active_field(&self) -> FieldSelector { self.projector.field() }

    pub fn frame(&self) -> &ChartFrame { &self.frame }

    pub fn dataset(&self) -> &Dataset { &self.dataset }

    /// Uppercased location name shown as the watermark.
    pub fn watermark_label(&self) -> &str { &self.label }

    pub fn renderer(&self) -> &ChartRenderer<S> { &self.renderer }

    pub fn surface(&self) -> &S { self.renderer.surface() }
}

impl LineChart<SvgDocument> {
    /// Chart on a fresh `width` x `height` SVG document.
    pub fn with_svg(width: f64, height: f64, dataset: Dataset, options: ChartOptions) -> Self {
        Self::initialize(SvgDocument::new(width, height), dataset, options)
    }

    pub fn to_svg_string(&self) -> String {
        self.surface().to_svg_string()
    }
}
