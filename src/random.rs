// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Random source shared by the demo handlers
//!
//! Handlers never touch a global generator: the source is owned by
//! [`AppState`](crate::AppState) and passed in through the router state.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the simulated latency in milliseconds
pub const MAX_LATENCY_MS: u32 = 500;

/// Upper bound (exclusive) of `randomValue` in `/api/test`
pub const RANDOM_VALUE_BOUND: u32 = 100;

/// Upper bound (inclusive) of `metricsCount` in `/api/metrics`
pub const MAX_METRICS_COUNT: u32 = 10;

/// Uniform integer source safe for concurrent use
pub trait RandomSource: Send + Sync {
    /// Draws a value in `[0, bound)`. `bound` must be non-zero.
    fn below(&self, bound: u32) -> u32;
}

/// Production source backed by the per-thread generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Deterministic source for reproducible runs
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&self, bound: u32) -> u32 {
        // generator state stays valid even if a holder panicked
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..bound)
    }
}

/// Builds the source: seeded when a seed is configured, thread-local otherwise
pub fn random_source(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => {
            tracing::info!("Using seeded random source (seed {})", seed);
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    }
}

/// Simulated processing delay in `[0, 500)` ms
pub fn simulated_latency_ms(source: &dyn RandomSource) -> u64 {
    u64::from(source.below(MAX_LATENCY_MS))
}

/// Value reported by `/api/test`, in `[0, 100)`
pub fn random_value(source: &dyn RandomSource) -> u32 {
    source.below(RANDOM_VALUE_BOUND)
}

/// Number of metrics reported by `/api/metrics`, in `[1, 10]`
pub fn metrics_count(source: &dyn RandomSource) -> u32 {
    source.below(MAX_METRICS_COUNT) + 1
}
