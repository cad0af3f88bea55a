//! Shared, read-only state handed to every request handler.

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::pipeline::AdvisoryPipeline;

/// Immutable per-process state.  Requests never write to it, so no locking
/// is needed.
pub struct AppState {
    /// Configuration snapshot taken at startup.
    pub config: AppConfig,
    /// The advisory pipeline (holds the speech synthesizer).
    pub pipeline: AdvisoryPipeline,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig, pipeline: AdvisoryPipeline) -> Self {
        Self {
            config,
            pipeline,
            started_at: Instant::now(),
        }
    }

    /// Build the state, including the pipeline, from `config`.
    pub fn from_config(config: AppConfig) -> Self {
        let pipeline = AdvisoryPipeline::from_config(&config);
        Self::new(config, pipeline)
    }

    /// Seconds since the server started.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Cheap-to-clone handle used as the axum router state.
pub type SharedState = Arc<AppState>;
