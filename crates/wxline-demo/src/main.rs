// File: crates/wxline-demo/src/main.rs
// Summary: Loads a weather dataset, cycles the chart through its fields and writes every frame.

mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use wxline_core::{Dataset, LineChart};

use crate::settings::{load_demo_config, DemoConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config/wxline.toml"));
    let cfg = load_demo_config(&cfg_path)?;
    tracing::info!(config = %cfg_path.display(), dataset = %cfg.dataset.display(), "starting");

    let dataset = load_dataset(&cfg)
        .with_context(|| format!("failed to load dataset '{}'", cfg.dataset.display()))?;
    tracing::info!(location = %dataset.location_name, observations = dataset.len(), "dataset loaded");

    let mut chart = LineChart::with_svg(cfg.width, cfg.height, dataset, cfg.chart.clone());
    for frame in 0..=cfg.refreshes {
        if frame > 0 {
            chart.refresh();
        }
        write_frame(&chart, &cfg.output_dir, frame, cfg.png)?;
    }
    Ok(())
}

fn load_dataset(cfg: &DemoConfig) -> Result<Dataset> {
    let is_csv = cfg
        .dataset
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let dataset = if is_csv {
        let location = cfg.location.clone().unwrap_or_else(|| {
            cfg.dataset
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        Dataset::from_csv_path(location, &cfg.dataset)?
    } else {
        Dataset::from_json_path(&cfg.dataset)?
    };
    Ok(dataset)
}

/// Write frame `n` as `frame_<n>_<field>.svg` (and `.png`) under `dir`.
fn write_frame(chart: &LineChart, dir: &Path, n: usize, png: bool) -> Result<()> {
    let field = chart.frame().field();
    let stem = format!("frame_{n}_{}", field.label().to_lowercase());

    let svg = dir.join(format!("{stem}.svg"));
    chart.render_to_svg(&svg)?;
    tracing::info!(frame = n, %field, points = chart.frame().series.len(), path = %svg.display(), "wrote svg");

    if png {
        let out = svg.with_extension("png");
        chart.render_to_png(&out)?;
        tracing::info!(frame = n, path = %out.display(), "wrote png");
    }
    Ok(())
}
