// File: crates/wxline-core/src/error.rs
// Summary: Error types for dataset loading and chart output.

use std::path::PathBuf;

/// Failure to load a weather dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset JSON")]
    Json(#[from] serde_json::Error),
    #[error("malformed dataset CSV")]
    Csv(#[from] csv::Error),
}

/// Failure to export a rendered chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("raster export failed")]
    Raster(#[source] Box<dyn std::error::Error + Send + Sync>),
}
