// File: crates/wxline-core/src/raster.rs
// Summary: Headless PNG export of the current chart frame using Skia CPU raster surfaces.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::chart::LineChart;
use crate::error::ChartError;
use crate::line::line_points;
use crate::surface::{DrawingSurface, SvgDocument};
use crate::theme::{Rgba, Theme};

/// CSS `em` in surface units, used to size the watermark.
const EM: f32 = 16.0;
const AXIS_FONT_SIZE: f32 = 10.0;

impl<S: DrawingSurface> LineChart<S> {
    /// Rasterize the current frame and encode it as PNG.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let (w, h) = self.surface().size();
        let (w, h) = ((w.ceil() as i32).max(1), (h.ceil() as i32).max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        let renderer = self.renderer();
        let theme = renderer.theme();
        canvas.clear(theme.background.unwrap_or(Rgba::rgb(255, 255, 255)).to_skia());

        let insets = renderer.insets();
        canvas.save();
        canvas.translate((insets.left as f32, insets.top as f32));

        draw_watermark(canvas, self.watermark_label(), w as f32, h as f32, theme);

        let frame = self.frame();
        if let Some(scales) = &frame.scales {
            let area = renderer.area();
            canvas.save();
            canvas.translate((0.0, area.height as f32));
            draw_axis(canvas, &Axis::bottom(&scales.x, renderer.tick_count()), theme);
            canvas.restore();
            draw_axis(canvas, &Axis::left(&scales.y, renderer.tick_count()), theme);

            let points = line_points(&frame.series, scales);
            draw_line(canvas, &points, renderer.stroke_width() as f32, theme.line_stroke);
        }
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the current frame to a PNG file, creating parent directories.
    pub fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes().map_err(|e| ChartError::Raster(e.into()))?;
        write_file(output_png_path.as_ref(), &bytes)
    }
}

impl LineChart<SvgDocument> {
    /// Write the SVG markup of the current frame to a file, creating parent directories.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<Path>) -> Result<(), ChartError> {
        write_file(output_svg_path.as_ref(), self.to_svg_string().as_bytes())
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ChartError> {
    let wrap = |source| ChartError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, bytes).map_err(wrap)
}

// ---- helpers ----------------------------------------------------------------

fn font(size: f32, bold: bool) -> skia::Font {
    let style = if bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() };
    match skia::FontMgr::default().match_family_style("sans-serif", style) {
        Some(typeface) => skia::Font::from_typeface(typeface, size),
        None => {
            let mut f = skia::Font::default();
            f.set_size(size);
            f
        }
    }
}

fn fill_paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color.to_skia());
    paint
}

fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = fill_paint(color);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

/// Baseline offset that vertically centres text on `y`.
fn middle_baseline(font: &skia::Font, y: f32) -> f32 {
    let (_, metrics) = font.metrics();
    y - (metrics.ascent + metrics.descent) / 2.0
}

fn draw_watermark(canvas: &skia::Canvas, label: &str, surface_w: f32, surface_h: f32, theme: &Theme) {
    if label.is_empty() { return; }
    let font = font(2.3 * EM, true);
    let paint = fill_paint(theme.watermark);
    let (width, _) = font.measure_str(label, Some(&paint));
    let x = surface_w * 0.4 - width / 2.0;
    let y = middle_baseline(&font, surface_h * 0.5);
    canvas.draw_str(label, (x, y), &font, &paint);
}

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, theme: &Theme) {
    let line = stroke_paint(theme.axis, 1.0);
    let text = fill_paint(theme.axis_label);
    let font = font(AXIS_FONT_SIZE, false);
    let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
    let (size, pad) = (TICK_SIZE as f32, TICK_PADDING as f32);

    match axis.orient {
        Orient::Bottom => {
            canvas.draw_line((r0, 0.0), (r1, 0.0), &line);
            canvas.draw_line((r0, 0.0), (r0, size), &line);
            canvas.draw_line((r1, 0.0), (r1, size), &line);
            for tick in &axis.ticks {
                let x = tick.offset as f32;
                canvas.draw_line((x, 0.0), (x, size), &line);
                let (w, _) = font.measure_str(&tick.label, Some(&text));
                let (_, metrics) = font.metrics();
                canvas.draw_str(&tick.label, (x - w / 2.0, size + pad - metrics.ascent), &font, &text);
            }
        }
        Orient::Left => {
            canvas.draw_line((0.0, r0), (0.0, r1), &line);
            canvas.draw_line((-size, r0), (0.0, r0), &line);
            canvas.draw_line((-size, r1), (0.0, r1), &line);
            for tick in &axis.ticks {
                let y = tick.offset as f32;
                canvas.draw_line((-size, y), (0.0, y), &line);
                let (w, _) = font.measure_str(&tick.label, Some(&text));
                canvas.draw_str(&tick.label, (-(size + pad) - w, middle_baseline(&font, y)), &font, &text);
            }
        }
    }
}

fn draw_line(canvas: &skia::Canvas, points: &[(f64, f64)], width: f32, color: Rgba) {
    let Some((&(x0, y0), rest)) = points.split_first() else { return };
    let mut path = skia::PathBuilder::new();
    path.move_to((x0 as f32, y0 as f32));
    for &(x, y) in rest {
        path.line_to((x as f32, y as f32));
    }

    let mut stroke = stroke_paint(color, width);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path.detach(), &stroke);
}
