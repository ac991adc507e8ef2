// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::api::AppState;
use crate::clock::timestamp;
use crate::random::{random_value, simulated_latency_ms};

/// `/api/test` response structure
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResponse {
    pub message: String,
    pub random_value: u32,
    pub timestamp: String,
}

/// GET /api/test
///
/// Simulates processing by sleeping for a random delay in `[0, 500)` ms,
/// then reports a random value in `[0, 100)`. The sleep suspends only the
/// current request's task.
pub async fn test_activity(State(state): State<Arc<AppState>>) -> Json<TestResponse> {
    tracing::info!("Test endpoint called - generating some activity");

    let delay_ms = simulated_latency_ms(state.random.as_ref());
    tracing::debug!("Simulating {} ms of processing", delay_ms);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    let response = TestResponse {
        message: "Test endpoint successful".to_string(),
        random_value: random_value(state.random.as_ref()),
        timestamp: timestamp(),
    };

    tracing::info!(
        "Test endpoint completed with random value: {}",
        response.random_value
    );

    Json(response)
}
