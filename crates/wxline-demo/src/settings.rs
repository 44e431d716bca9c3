// File: crates/wxline-demo/src/settings.rs
// Summary: Demo settings loaded from a TOML file via the config crate.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use wxline_core::types::{HEIGHT, WIDTH};
use wxline_core::ChartOptions;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// JSON asset, or CSV when the extension is `.csv`.
    pub dataset: PathBuf,
    /// Location label for CSV datasets; JSON carries its own.
    pub location: Option<String>,
    pub width: f64,
    pub height: f64,
    /// Refreshes after the initial frame.
    pub refreshes: usize,
    pub output_dir: PathBuf,
    pub png: bool,
    pub chart: ChartOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("assets/weather-data.json"),
            location: None,
            width: f64::from(WIDTH),
            height: f64::from(HEIGHT),
            refreshes: 3,
            output_dir: PathBuf::from("target/out"),
            png: true,
            chart: ChartOptions::default(),
        }
    }
}

pub fn load_demo_config(path: &Path) -> anyhow::Result<DemoConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .with_context(|| format!("reading config '{}'", path.display()))?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxline_core::FieldSelector;

    fn parse(toml: &str) -> DemoConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("valid settings")
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let cfg = parse(
            r#"
            dataset = "obs.csv"
            location = "Boise"
            width = 800

            [chart]
            initial_field = "Visibility"
            advance_on_init = true

            [chart.insets]
            left = 40
            "#,
        );

        assert_eq!(cfg.dataset, PathBuf::from("obs.csv"));
        assert_eq!(cfg.location.as_deref(), Some("Boise"));
        assert_eq!(cfg.width, 800.0);
        assert_eq!(cfg.height, f64::from(HEIGHT));
        assert_eq!(cfg.chart.initial_field, FieldSelector::Visibility);
        assert!(cfg.chart.advance_on_init);
        assert_eq!(cfg.chart.insets.left, 40);
        assert_eq!(cfg.chart.insets.top, 10);
        assert_eq!(cfg.chart.tick_count, 10);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = config::Config::builder()
            .add_source(config::File::from_str("[chart]\ninitial_field = \"pressure\"", config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize::<DemoConfig>());
        assert!(result.is_err());
    }
}
