//! Render-cycle bundle writer.
//!
//! `invstat report` runs the whole pipeline for one location and writes the
//! results as a directory of JSON files with a checksummed manifest, so a
//! dashboard run can be archived or diffed.

use anyhow::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use inv_table::inventory;

#[derive(Debug, Clone, Serialize)]
pub struct BundleMeta {
    pub tool: String,
    pub tool_version: String,
    pub created_unix_ms: u128,
    pub command: String,
    pub args: serde_json::Value,
    pub input: BundleInputMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct BundleInputMeta {
    pub original_path: String,
    pub input_sha256: String,
}

#[derive(Debug, Clone, Serialize)]
struct Manifest {
    bundle_version: u32,
    files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize)]
struct ManifestFile {
    path: String,
    bytes: u64,
    sha256: String,
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    let out = h.finalize();
    let mut s = String::with_capacity(64);
    for b in out {
        s.push_str(&format!("{:02x}", b));
    }
    s
}

fn sha256_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(sha256_hex(&bytes))
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(std::fs::metadata(path)?.len())
}

fn ensure_empty_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if !dir.is_dir() {
            anyhow::bail!("bundle path exists but is not a directory: {}", dir.display());
        }
        // Keep it simple: require empty dir (or non-existent). This avoids accidental overwrites.
        if dir.read_dir()?.next().is_some() {
            anyhow::bail!("bundle directory must be empty: {}", dir.display());
        }
    } else {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn cmd_report(input: &PathBuf, location: Option<&str>, bundle_dir: &Path) -> Result<()> {
    ensure_empty_dir(bundle_dir)?;

    let inputs_dir = bundle_dir.join("inputs");
    let outputs_dir = bundle_dir.join("outputs");
    std::fs::create_dir_all(&inputs_dir)?;
    std::fs::create_dir_all(&outputs_dir)?;

    let input_bytes = std::fs::read(input)?;
    let input_sha256 = sha256_hex(&input_bytes);

    let input_copy = inputs_dir.join("input.csv");
    std::fs::write(&input_copy, &input_bytes)?;

    // Run the full render cycle for the selected location.
    let frame = inv_table::parse_csv(&input_bytes)?;
    let locations = inventory::list_locations(&frame)?;
    let location = match location {
        Some(l) => l.to_string(),
        None => locations
            .first()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("table contains no Location values to select"))?,
    };
    tracing::info!(location = %location, rows = frame.n_rows(), "writing report bundle");

    let view = inventory::filter_by_location(&frame, &location)?;
    let aggregate = inventory::aggregate_by_category(&frame)?;
    let corr = inv_stats::correlation_matrix(&frame);

    let summary = inv_stats::describe(&frame);
    let insights = inventory::insights(&view, &location)?;
    let bar = inv_viz::bar_artifact(&view)?;
    let pie = inv_viz::pie_artifact(&aggregate);
    let scatter = inv_viz::scatter_artifact(&view)?;
    let heatmap = inv_viz::heatmap_artifact(&corr)?;

    let render = serde_json::json!({
        "n_rows": frame.n_rows(),
        "n_cols": frame.n_cols(),
        "summary": summary,
        "locations": locations,
        "location": location,
        "filtered_rows": view.n_rows(),
        "insights": insights,
    });

    let outputs: [(&str, serde_json::Value); 5] = [
        ("outputs/render.json", render),
        ("outputs/bar.json", serde_json::to_value(&bar)?),
        ("outputs/pie.json", serde_json::to_value(&pie)?),
        ("outputs/scatter.json", serde_json::to_value(&scatter)?),
        ("outputs/heatmap.json", serde_json::to_value(&heatmap)?),
    ];
    for (rel, value) in &outputs {
        std::fs::write(bundle_dir.join(rel), serde_json::to_string_pretty(value)?)?;
    }

    let created_unix_ms = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    let meta = BundleMeta {
        tool: "invstat".to_string(),
        tool_version: inv_core::VERSION.to_string(),
        created_unix_ms,
        command: "report".to_string(),
        args: serde_json::json!({
            "input": input.display().to_string(),
            "location": location,
        }),
        input: BundleInputMeta {
            original_path: input.display().to_string(),
            input_sha256,
        },
    };
    let meta_path = bundle_dir.join("meta.json");
    std::fs::write(&meta_path, serde_json::to_string_pretty(&meta)?)?;

    let mut files = Vec::new();
    let mut rels = vec!["meta.json".to_string(), "inputs/input.csv".to_string()];
    rels.extend(outputs.iter().map(|(rel, _)| rel.to_string()));
    for rel in rels {
        let p = bundle_dir.join(&rel);
        files.push(ManifestFile { path: rel, bytes: file_size(&p)?, sha256: sha256_file(&p)? });
    }

    let manifest = Manifest { bundle_version: 1, files };
    let manifest_path = bundle_dir.join("manifest.json");
    std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;

    tracing::info!(dir = %bundle_dir.display(), files = manifest.files.len(), "bundle written");
    Ok(())
}
