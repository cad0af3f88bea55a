//! Configuration module for the Krishi advisor.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the HTTP shell
//! and the speech synthesizer, `AppPaths` for cross-platform data
//! directories, and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, ServerConfig, TtsConfig, TtsProvider};
