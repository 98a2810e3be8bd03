//! boxplot-rs: geometry for box-and-whisker charts.
//!
//! The crate computes what a host chart needs to draw boxplots: the raw data
//! extent including outliers, a padded value-axis range, and per-sample
//! whisker, cap, median, box and outlier-marker primitives. Drawing itself is
//! delegated to a host-supplied [`render::ShapeRenderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BoxplotOptions, BoxplotSeries};
pub use error::{ChartError, ChartResult};
