use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::clock::timestamp;

pub const HOME_MESSAGE: &str = "Hello from Spring Boot + DataDog POC!";

/// Home endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
    pub timestamp: String,
    pub status: String,
}

/// GET /
pub async fn home() -> impl IntoResponse {
    tracing::info!("Home endpoint called");

    let response = HomeResponse {
        message: HOME_MESSAGE.to_string(),
        timestamp: timestamp(),
        status: "success".to_string(),
    };

    (StatusCode::OK, Json(response))
}
