//! Scatter artifact — inventory value vs count, one series per category.

use inv_core::Result;
use inv_table::{inventory, Frame};
use serde::Serialize;

/// Scatter of Value (x) × Count (y) over a filtered view, grouped into one
/// series per `Category` so a renderer can colour by category.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Series in first-seen category order.
    pub series: Vec<ScatterSeries>,
}

/// Points for one category.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterSeries {
    /// Category name (the colour key).
    pub category: String,
    /// X coordinates (`Value`).
    pub x: Vec<f64>,
    /// Y coordinates (`Count`), index-aligned with `x`.
    pub y: Vec<f64>,
}

/// Build the scatter artifact from a location-filtered view.
///
/// Rows with a null `Value` or `Count` are dropped, the way a plotting
/// library drops NaN points.
pub fn scatter_artifact(filtered: &Frame) -> Result<ScatterArtifact> {
    let cat_idx = filtered.require_column(inventory::CATEGORY)?;
    let values = filtered.numeric_column(inventory::VALUE)?;
    let counts = filtered.numeric_column(inventory::COUNT)?;

    let mut series: Vec<ScatterSeries> = Vec::new();
    for ((row, value), count) in filtered.rows().iter().zip(values).zip(counts) {
        let (Some(x), Some(y)) = (value, count) else { continue };
        let category = row[cat_idx].as_str();
        match series.iter_mut().find(|s| s.category == category) {
            Some(s) => {
                s.x.push(x);
                s.y.push(y);
            }
            None => series.push(ScatterSeries {
                category: category.to_string(),
                x: vec![x],
                y: vec![y],
            }),
        }
    }

    Ok(ScatterArtifact {
        schema_version: "invstat_scatter_v0".to_string(),
        title: "Inventory Value vs Count".to_string(),
        x_label: inventory::VALUE.to_string(),
        y_label: inventory::COUNT.to_string(),
        series,
    })
}
