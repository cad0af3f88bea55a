//! Application entry point — Krishi advisor web app.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Build the shared state: speech synthesizer + advisory pipeline.
//! 4. Bind the configured address and serve the router until the process
//!    is stopped.

use std::sync::Arc;

use krishi_advisor::{
    config::{AppConfig, AppPaths},
    web::{router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Krishi advisor v{} starting up", env!("CARGO_PKG_VERSION"));

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    log::info!("Settings file: {}", AppPaths::new().settings_file.display());
    log::info!(
        "Speech: {:?} via {} (language {}, timeout {:?})",
        config.tts.provider,
        config.tts.base_url,
        config.tts.language,
        config.tts.timeout()
    );

    // 3. Shared state
    let addr = config.server.bind_addr();
    let state = Arc::new(AppState::from_config(config));

    // 4. Serve
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Open http://{addr} in a browser");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
