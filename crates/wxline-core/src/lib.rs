// File: crates/wxline-core/src/lib.rs
// Summary: Core library entry point; exports the weather line chart API.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod field;
pub mod line;
pub mod raster;
pub mod renderer;
pub mod scale;
pub mod series;
pub mod surface;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::Axis;
pub use chart::{ChartFrame, ChartOptions, LineChart};
pub use dataset::{Dataset, Observation};
pub use error::{ChartError, DatasetError};
pub use field::{advance, FieldSelector};
pub use renderer::ChartRenderer;
pub use scale::{value_domain, ChartScales, LinearScale, ScaleTransform, TimeScale};
pub use series::{project, ChartDataProjector, ProjectedPoint, ProjectedSeries};
pub use surface::{DrawingSurface, NodeId, SvgDocument};
pub use theme::Theme;
