//! Annotated correlation heatmap artifact (numbers-first).

use std::time::{SystemTime, UNIX_EPOCH};

use inv_core::Result;
use inv_stats::CorrelationMatrix;
use serde::Serialize;

/// Annotated heatmap of the correlation matrix.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Artifact provenance.
    pub meta: HeatmapMeta,
    /// Chart title.
    pub title: String,
    /// Axis labels (both axes share them).
    pub columns: Vec<String>,
    /// Row-major correlation values.
    pub values: Vec<Vec<f64>>,
    /// Cell annotations: each value formatted to two decimals.
    pub annotations: Vec<Vec<String>>,
    /// Colorscale hint for the renderer.
    pub colorscale: String,
}

/// Provenance block for the heatmap artifact.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapMeta {
    /// Producing tool.
    pub tool: String,
    /// Tool version.
    pub tool_version: String,
    /// Creation timestamp, Unix milliseconds.
    pub created_unix_ms: u128,
}

fn now_unix_ms() -> Result<u128> {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| inv_core::Error::Computation(format!("system time error: {}", e)))?;
    Ok(d.as_millis())
}

/// Build the heatmap artifact from a computed correlation matrix.
pub fn heatmap_artifact(corr: &CorrelationMatrix) -> Result<HeatmapArtifact> {
    let annotations = corr
        .values
        .iter()
        .map(|row| row.iter().map(|v| format!("{:.2}", v)).collect())
        .collect();

    Ok(HeatmapArtifact {
        schema_version: "invstat_heatmap_v0".to_string(),
        meta: HeatmapMeta {
            tool: "invstat".to_string(),
            tool_version: inv_core::VERSION.to_string(),
            created_unix_ms: now_unix_ms()?,
        },
        title: "Correlation Heatmap".to_string(),
        columns: corr.columns.clone(),
        values: corr.values.clone(),
        annotations,
        colorscale: "Viridis".to_string(),
    })
}
