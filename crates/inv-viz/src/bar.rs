//! Bar chart artifact — inventory count by item for one location's view.

use inv_core::Result;
use inv_table::{inventory, Frame};
use serde::Serialize;

/// Bar chart of Item × Count over a filtered view.
#[derive(Debug, Clone, Serialize)]
pub struct BarArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// One entry per view row; a renderer stacks duplicate labels.
    pub bars: Vec<BarEntry>,
}

/// A single bar.
#[derive(Debug, Clone, Serialize)]
pub struct BarEntry {
    /// Item name.
    pub label: String,
    /// Count for this row (0 for a null cell).
    pub value: f64,
}

/// Build the bar artifact from a location-filtered view.
pub fn bar_artifact(filtered: &Frame) -> Result<BarArtifact> {
    let item_idx = filtered.require_column(inventory::ITEM)?;
    let counts = filtered.numeric_column(inventory::COUNT)?;

    let bars = filtered
        .rows()
        .iter()
        .zip(counts)
        .map(|(row, count)| BarEntry {
            label: row[item_idx].clone(),
            value: count.unwrap_or(0.0),
        })
        .collect();

    Ok(BarArtifact {
        schema_version: "invstat_bar_v0".to_string(),
        title: "Inventory Count by Item".to_string(),
        x_label: inventory::ITEM.to_string(),
        y_label: inventory::COUNT.to_string(),
        bars,
    })
}
