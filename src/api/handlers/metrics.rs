// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::api::AppState;
use crate::clock::timestamp;
use crate::error::{AppError, Result};
use crate::random::metrics_count;

/// `/api/metrics` response structure
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub message: String,
    pub metrics_count: u32,
    pub timestamp: String,
}

/// Parses the optional request body.
///
/// Empty bodies and a literal `null` count as absent; anything else must be
/// a JSON object.
pub fn parse_payload(body: &[u8]) -> Result<Option<Map<String, Value>>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice::<Option<Map<String, Value>>>(body)
        .map_err(|e| AppError::InvalidPayload(e.to_string()))
}

/// POST /api/metrics
///
/// Logs the received payload and reports a synthetic metrics count in `[1, 10]`.
/// The payload is never validated beyond being a JSON object, nor stored.
pub async fn trigger_metrics(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MetricsResponse>> {
    let payload = parse_payload(&body)?;

    let rendered = match &payload {
        Some(map) => Value::Object(map.clone()).to_string(),
        None => "null".to_string(),
    };
    tracing::info!("Metrics endpoint called with payload: {}", rendered);

    let response = MetricsResponse {
        message: "Custom metrics triggered".to_string(),
        metrics_count: metrics_count(state.random.as_ref()),
        timestamp: timestamp(),
    };

    tracing::info!("Generated {} custom metrics", response.metrics_count);

    Ok(Json(response))
}
