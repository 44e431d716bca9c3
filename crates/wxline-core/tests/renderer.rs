// File: crates/wxline-core/tests/renderer.rs
// Purpose: Renderer frame setup, empty-series drawing, and clear() behaviour on the SVG surface.

use wxline_core::axis::MAX_TICK_COUNT;
use wxline_core::types::Insets;
use wxline_core::{
    project, ChartOptions, ChartRenderer, Dataset, DrawingSurface, FieldSelector, LineChart,
    SvgDocument,
};

fn two_days() -> Dataset {
    Dataset::from_json_str(include_str!("fixtures/two_days.json")).expect("fixture parses")
}

fn renderer() -> ChartRenderer<SvgDocument> {
    ChartRenderer::initialize(SvgDocument::new(400.0, 200.0), "SEATTLE", &ChartOptions::default())
}

#[test]
fn initialize_measures_area_and_draws_watermark() {
    let r = renderer();
    let area = r.area();
    assert_eq!(area.width, 365.0);
    assert!((area.height - 155.0).abs() < 1e-9);

    let doc = r.surface();
    assert_eq!(doc.attr(r.plot_group(), "transform"), Some("translate(25,10)"));
    assert_eq!(doc.text(r.watermark()), Some("SEATTLE"));
    assert_eq!(doc.attr(r.watermark(), "x"), Some("40%"));
    assert_eq!(doc.attr(r.watermark(), "text-anchor"), Some("middle"));
    assert_eq!(doc.children(r.plot_group()), &[r.watermark()]);
}

#[test]
fn empty_series_draws_no_axes_and_an_empty_path() {
    let mut r = renderer();
    let series = project(&Dataset::new("x", Vec::new()), FieldSelector::Temperature);

    let scales = r.draw_axes(&series);
    assert!(scales.is_none());
    let path = r.draw_line(&series, scales.as_ref());

    let doc = r.surface();
    assert!(doc.select_all(r.plot_group(), "g").is_empty());
    assert!(doc.select_all(doc.root(), "line").is_empty(), "no tick marks");
    assert_eq!(doc.attr(path, "d"), Some(""));
    assert_eq!(doc.attr(path, "fill"), Some("none"));
}

#[test]
fn axes_have_bottom_and_left_groups_with_ticks() {
    let mut r = renderer();
    let series = project(&two_days(), FieldSelector::Temperature);
    let scales = r.draw_axes(&series).expect("non-empty series has scales");

    assert_eq!(scales.y.domain, (9.0, 12.0));
    assert_eq!(scales.y.range, (155.0, 0.0));
    assert_eq!(scales.x.range, (0.0, 365.0));

    let doc = r.surface();
    let groups = doc.children(r.plot_group())[1..].to_vec();
    assert_eq!(groups.len(), 2);
    assert_eq!(doc.attr(groups[0], "transform"), Some("translate(0,155)"));
    assert_eq!(doc.attr(groups[1], "class"), Some("axis axis--y"));
    assert!(!doc.select_all(groups[0], "line").is_empty());
    assert!(!doc.select_all(groups[1], "line").is_empty());
    assert_eq!(doc.attr(doc.children(groups[1])[0], "class"), Some("domain"));
}

#[test]
fn line_visits_points_in_order() {
    let mut r = renderer();
    let series = project(&two_days(), FieldSelector::Temperature);
    let scales = r.draw_axes(&series);
    let path = r.draw_line(&series, scales.as_ref());

    let d = r.surface().attr(path, "d").expect("path data").to_string();
    assert!(d.starts_with("M0,"), "first point at left edge: {d}");
    assert!(d.contains("L365,0"), "last point is the max, top right: {d}");
    assert_eq!(r.surface().attr(path, "stroke-linecap"), Some("round"));
    assert_eq!(r.surface().attr(path, "stroke-width"), Some("1.5"));
}

#[test]
fn clear_is_idempotent_and_keeps_watermark() {
    let mut r = renderer();
    let series = project(&two_days(), FieldSelector::Visibility);
    let scales = r.draw_axes(&series);
    r.draw_line(&series, scales.as_ref());
    assert!(r.surface().children(r.plot_group()).len() > 1);

    r.clear();
    let once = r.surface().to_svg_string();
    assert_eq!(r.surface().children(r.plot_group()), &[r.watermark()]);

    r.clear();
    assert_eq!(r.surface().to_svg_string(), once);
    assert!(r.surface().is_live(r.watermark()));
}

#[test]
fn oversized_insets_clamp_to_an_empty_area() {
    let options = ChartOptions {
        insets: Insets::new(u32::MAX, 10, 10, 15),
        ..ChartOptions::default()
    };
    let r = ChartRenderer::initialize(SvgDocument::new(400.0, 200.0), "SEATTLE", &options);
    assert_eq!(r.area().width, 0.0);

    let chart = LineChart::with_svg(400.0, 200.0, two_days(), options);
    assert!(chart.frame().scales.is_some());
}

#[test]
fn tick_count_is_capped() {
    let options = ChartOptions { tick_count: usize::MAX, ..ChartOptions::default() };
    let mut r = ChartRenderer::initialize(SvgDocument::new(400.0, 200.0), "SEATTLE", &options);
    assert_eq!(r.tick_count(), MAX_TICK_COUNT);

    let series = project(&two_days(), FieldSelector::Temperature);
    assert!(r.draw_axes(&series).is_some());
    let doc = r.surface();
    assert!(doc.select_all(r.plot_group(), "text").len() < 4 * MAX_TICK_COUNT);
}
