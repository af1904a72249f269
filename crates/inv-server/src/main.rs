//! invstat server — inventory dashboard API.
//!
//! Serves the upload → statistics → charts render cycle as a JSON REST API
//! so any reactive front end can drive it.
//!
//! # Endpoints
//!
//! - `POST /v1/upload/{filename}` — raw CSV bytes → full render payload
//! - `GET  /v1/render/{filename}` — re-render a stored upload
//! - `GET  /v1/health`            — server status, version, counters
//! - `GET  /v1/openapi.json`      — OpenAPI 3.1 document

mod openapi;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use inv_table::UploadStore;
use state::AppState;

/// invstat dashboard server — inventory analytics over HTTP.
#[derive(Parser, Debug)]
#[command(name = "invstat-server", version = inv_core::VERSION, about)]
struct Cli {
    /// Port to listen on.
    #[arg(short, long, default_value = "3750")]
    port: u16,

    /// Bind address.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Directory for durable upload storage (created if absent).
    #[arg(long, default_value = "uploads")]
    uploads_dir: String,

    /// Maximum request body size in MiB (applies to all endpoints).
    ///
    /// Protects the server from accidental oversized uploads.
    #[arg(long, default_value = "64")]
    max_body_mb: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();

    let uploads = UploadStore::new(&cli.uploads_dir)?;
    let state = Arc::new(AppState::new(uploads));

    let max_body_bytes = mb_to_bytes(cli.max_body_mb);

    let app = Router::new()
        .merge(routes::router())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    tracing::info!(
        %addr,
        uploads_dir = %cli.uploads_dir,
        version = inv_core::VERSION,
        "invstat-server starting"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn mb_to_bytes(mb: usize) -> usize {
    // Clamp overflow to usize::MAX to avoid panics in debug builds.
    mb.saturating_mul(1024).saturating_mul(1024)
}
