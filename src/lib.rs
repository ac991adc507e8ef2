// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Telemetry Demo
//!
//! Small HTTP service whose endpoints exist to generate observable activity
//! (log lines, latency, server errors) for an external monitoring agent.
//!
//! ## Main modules
//! - `api`: HTTP router, shared state and handlers
//! - `clock`: response timestamps
//! - `config`: configuration management
//! - `error`: error types and their HTTP rendering
//! - `random`: injected random source
//! - `prelude`: commonly used types and traits

mod api;
mod clock;
mod config;
mod error;
mod random;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, ErrorResponse, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Response bodies and fixed messages
pub use api::handlers::{
    HOME_MESSAGE, HealthResponse, HomeResponse, MetricsResponse, SIMULATED_ERROR_MESSAGE,
    TestResponse,
};

/// Random sources and the value ranges drawn from them
pub use random::{
    MAX_LATENCY_MS, MAX_METRICS_COUNT, RANDOM_VALUE_BOUND, RandomSource, SeededRandom,
    ThreadRandom, random_source,
};

/// Timestamp formatting
pub use clock::{TIMESTAMP_FORMAT, timestamp};
