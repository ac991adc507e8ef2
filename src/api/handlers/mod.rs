// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod activity;
mod error;
mod health;
mod home;
mod metrics;

pub use activity::{TestResponse, test_activity};
pub use error::{SIMULATED_ERROR_MESSAGE, error_test};
pub use health::{HealthResponse, health_check};
pub use home::{HOME_MESSAGE, HomeResponse, home};
pub use metrics::{MetricsResponse, trigger_metrics};
