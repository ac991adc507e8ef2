use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::clock::timestamp;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// GET /health
///
/// Simple health check endpoint for monitoring service status.
/// Always reports "UP" with the current time.
pub async fn health_check() -> impl IntoResponse {
    tracing::info!("Health check endpoint called");

    let response = HealthResponse {
        status: "UP".to_string(),
        timestamp: timestamp(),
    };

    (StatusCode::OK, Json(response))
}
