//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::Config;
use crate::random::{RandomSource, random_source};

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    /// Builds state with the random source selected by the configuration
    pub fn from_config(config: Config) -> Self {
        let random = random_source(config.rng_seed);
        Self { config, random }
    }
}
