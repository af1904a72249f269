//! HTTP route handlers for the invstat server.
//!
//! All endpoints live under `/v1/` and return JSON. Each handler runs one
//! full render cycle inline: the pipeline is a cheap pure computation, so
//! there is nothing to offload to a blocking pool.

use std::sync::atomic::Ordering;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use inv_stats::ColumnSummary;
use inv_table::{inventory, Frame};
use inv_viz::{BarArtifact, HeatmapArtifact, PieArtifact, ScatterArtifact};

use crate::openapi::openapi_spec;
use crate::state::SharedState;

/// Rows included in the table previews of a render payload.
const PREVIEW_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/v1/upload/{filename}", post(upload_handler))
        .route("/v1/render/{filename}", get(render_handler))
        .route("/v1/health", get(health_handler))
        .route("/v1/openapi.json", get(openapi_handler))
}

// ---------------------------------------------------------------------------
// Render cycle
// ---------------------------------------------------------------------------

/// Query parameters shared by upload and render.
#[derive(Debug, Deserialize)]
struct RenderQuery {
    /// Location to filter to. Defaults to the first listed location.
    location: Option<String>,
}

/// One full render cycle: everything the dashboard shows for one upload.
#[derive(Debug, Serialize)]
struct RenderResponse {
    filename: String,
    saved_path: String,
    n_rows: usize,
    n_cols: usize,
    preview: Frame,
    summary: Vec<ColumnSummary>,
    locations: Vec<String>,
    location: String,
    filtered_rows: usize,
    filtered: Frame,
    bar: BarArtifact,
    pie: PieArtifact,
    scatter: ScatterArtifact,
    heatmap: HeatmapArtifact,
    insights: inv_core::Insights,
}

/// Run the pipeline stages in order for one upload and one selection.
///
/// The first failing stage aborts the cycle; the error goes back to the
/// client verbatim.
fn render_cycle(
    filename: &str,
    saved_path: String,
    frame: &Frame,
    requested: Option<String>,
) -> Result<RenderResponse, AppError> {
    let summary = inv_stats::describe(frame);
    let locations = inventory::list_locations(frame)?;

    let location = match requested {
        Some(l) => l,
        None => locations.first().cloned().ok_or_else(|| {
            AppError::bad_request("table contains no Location values to select".to_string())
        })?,
    };

    let filtered = inventory::filter_by_location(frame, &location)?;
    let aggregate = inventory::aggregate_by_category(frame)?;
    let corr = inv_stats::correlation_matrix(frame);
    let insights = inventory::insights(&filtered, &location)?;

    let bar = inv_viz::bar_artifact(&filtered)?;
    let pie = inv_viz::pie_artifact(&aggregate);
    let scatter = inv_viz::scatter_artifact(&filtered)?;
    let heatmap = inv_viz::heatmap_artifact(&corr)?;

    Ok(RenderResponse {
        filename: filename.to_string(),
        saved_path,
        n_rows: frame.n_rows(),
        n_cols: frame.n_cols(),
        preview: frame.head(PREVIEW_ROWS),
        summary,
        locations,
        location,
        filtered_rows: filtered.n_rows(),
        filtered,
        bar,
        pie,
        scatter,
        heatmap,
        insights,
    })
}

// ---------------------------------------------------------------------------
// POST /v1/upload/{filename}
// ---------------------------------------------------------------------------

async fn upload_handler(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
    Query(query): Query<RenderQuery>,
    body: Bytes,
) -> Result<Json<RenderResponse>, AppError> {
    state.inflight.fetch_add(1, Ordering::Relaxed);
    let _dec = DecrementOnDrop(&state.inflight);
    state.total_requests.fetch_add(1, Ordering::Relaxed);

    let (path, frame) = state.uploads.ingest(&filename, &body)?;
    let response =
        render_cycle(&filename, path.display().to_string(), &frame, query.location)?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// GET /v1/render/{filename}
// ---------------------------------------------------------------------------

async fn render_handler(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<RenderResponse>, AppError> {
    state.inflight.fetch_add(1, Ordering::Relaxed);
    let _dec = DecrementOnDrop(&state.inflight);
    state.total_requests.fetch_add(1, Ordering::Relaxed);

    if !state.uploads.contains(&filename)? {
        return Err(AppError::not_found(format!("no upload named {filename:?}")));
    }

    let frame = state.uploads.load(&filename)?;
    let saved_path = state.uploads.path_for(&filename)?.display().to_string();
    let response = render_cycle(&filename, saved_path, &frame, query.location)?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// GET /v1/health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_s: u64,
    uploads_dir: String,
    inflight: u64,
    total_requests: u64,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: inv_core::VERSION,
        uptime_s: state.started_at.elapsed().as_secs(),
        uploads_dir: state.uploads.dir().display().to_string(),
        inflight: state.inflight.load(Ordering::Relaxed),
        total_requests: state.total_requests.load(Ordering::Relaxed),
    })
}

async fn openapi_handler() -> Json<serde_json::Value> {
    Json(openapi_spec())
}

// ---------------------------------------------------------------------------
// Error plumbing
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    fn bad_request(msg: String) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: msg }
    }

    fn not_found(msg: String) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: msg }
    }

    fn internal(msg: String) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: msg }
    }
}

impl From<inv_core::Error> for AppError {
    fn from(err: inv_core::Error) -> Self {
        use inv_core::Error;
        match err {
            Error::Parse(_) | Error::Csv(_) | Error::MissingColumn(_) | Error::Validation(_) => {
                AppError::bad_request(err.to_string())
            }
            Error::Io(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
                AppError::not_found(err.to_string())
            }
            _ => AppError::internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "error": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

/// Guard that decrements the in-flight counter when a handler exits.
struct DecrementOnDrop<'a>(&'a std::sync::atomic::AtomicU64);

impl Drop for DecrementOnDrop<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}
