// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the telemetry demo service
//!
//! Loads configuration from environment variables. The binary loads an
//! optional `.env` file once at startup, before this module reads anything.

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const RNG_SEED: &str = "RNG_SEED";
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_addr: String,
    /// Seed for a reproducible random source; thread-local generator when unset
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            rng_seed: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr = lookup(env_vars::SERVER_ADDR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        let rng_seed = lookup(env_vars::RNG_SEED).and_then(|raw| match parse_seed(&raw) {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!("{}. Falling back to thread-local random source.", e);
                None
            }
        });

        Config {
            server_addr,
            rng_seed,
        }
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|e| {
        AppError::Config(format!(
            "Failed to parse {} '{}': {}",
            env_vars::RNG_SEED,
            raw,
            e
        ))
    })
}
