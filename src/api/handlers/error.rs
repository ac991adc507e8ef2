use axum::Json;

use crate::error::{AppError, Result};

/// Message carried by the simulated failure
pub const SIMULATED_ERROR_MESSAGE: &str = "This is a test error for DataDog monitoring";

/// GET /api/error
///
/// Always fails. The error is not handled here; the HTTP layer renders it
/// as a 500 response.
pub async fn error_test() -> Result<Json<serde_json::Value>> {
    tracing::error!("Error endpoint called - simulating an error");
    Err(AppError::Simulated(SIMULATED_ERROR_MESSAGE.to_string()))
}
