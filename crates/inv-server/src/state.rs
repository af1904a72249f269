//! Shared application state for the invstat server.

use std::sync::Arc;
use std::time::Instant;

use inv_table::UploadStore;

/// Shared state available to all request handlers.
pub struct AppState {
    /// Durable upload storage (flat directory, overwrite-on-collision).
    pub uploads: UploadStore,

    /// Server start time (for uptime reporting).
    pub started_at: Instant,

    /// In-flight request counter (for /health).
    pub inflight: std::sync::atomic::AtomicU64,

    /// Total requests served (for /health).
    pub total_requests: std::sync::atomic::AtomicU64,
}

impl AppState {
    pub fn new(uploads: UploadStore) -> Self {
        Self {
            uploads,
            started_at: Instant::now(),
            inflight: std::sync::atomic::AtomicU64::new(0),
            total_requests: std::sync::atomic::AtomicU64::new(0),
        }
    }
}

/// Type alias used in axum handlers.
pub type SharedState = Arc<AppState>;
