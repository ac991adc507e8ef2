//! HTTP API module for the telemetry demo service
//!
//! Every route exists to produce observable activity (logs, latency, errors)
//! for an external monitoring agent.
//!
//! # Endpoints
//! - `GET /` — greeting
//! - `GET /health` — health check
//! - `GET /api/test` — response after a random delay
//! - `POST /api/metrics` — synthetic metrics trigger
//! - `GET /api/error` — always fails with a server error

pub mod handlers;
mod state;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .route("/api/test", get(handlers::test_activity))
        .route("/api/metrics", post(handlers::trigger_metrics))
        .route("/api/error", get(handlers::error_test))
        .with_state(state)
}
