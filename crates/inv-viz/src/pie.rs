//! Pie chart artifact — category share of the whole inventory.
//!
//! Deliberately fed by the full-table category aggregate, not the filtered
//! view: the pie shows how the entire inventory splits across categories
//! even while the rest of the dashboard is scoped to one location.

use inv_core::CategoryCount;
use serde::{Deserialize, Serialize};

/// Category composition of total `Count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Chart title.
    pub title: String,
    /// Sum of `Count` across all slices.
    pub total_count: f64,
    /// Slices sorted by descending fraction.
    pub slices: Vec<PieSlice>,
}

/// One pie slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSlice {
    /// Category name.
    pub category: String,
    /// Sum of `Count` for this category.
    pub count: f64,
    /// Share of the total (0 when the total is 0).
    pub fraction: f64,
}

/// Build the pie artifact from the full-table category aggregate.
pub fn pie_artifact(aggregate: &[CategoryCount]) -> PieArtifact {
    let mut slices = Vec::with_capacity(aggregate.len());
    let mut total: f64 = 0.0;

    for entry in aggregate {
        total += entry.count;
        slices.push(PieSlice {
            category: entry.category.clone(),
            count: entry.count,
            fraction: 0.0,
        });
    }

    if total > 0.0 {
        for s in &mut slices {
            s.fraction = s.count / total;
        }
    }

    slices.sort_by(|a, b| {
        b.fraction.partial_cmp(&a.fraction).unwrap_or(std::cmp::Ordering::Equal)
    });

    PieArtifact {
        schema_version: "invstat_pie_v0".to_string(),
        title: "Inventory Distribution by Item Category".to_string(),
        total_count: total,
        slices,
    }
}
