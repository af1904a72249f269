//! # inv-viz
//!
//! Visualization data artifacts for invstat.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly JSON structures (arrays instead of nested objects). Actual
//! rendering is the job of whatever front end consumes the artifacts.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Bar chart artifact (per-item counts for one location).
pub mod bar;

/// Annotated correlation heatmap artifact.
pub mod heatmap;

/// Pie chart artifact (category share of total count).
pub mod pie;

/// Scatter artifact (value vs count, one series per category).
pub mod scatter;

pub use bar::{bar_artifact, BarArtifact, BarEntry};
pub use heatmap::{heatmap_artifact, HeatmapArtifact, HeatmapMeta};
pub use pie::{pie_artifact, PieArtifact, PieSlice};
pub use scatter::{scatter_artifact, ScatterArtifact, ScatterSeries};
