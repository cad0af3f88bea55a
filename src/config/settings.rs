//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// TtsProvider
// ---------------------------------------------------------------------------

/// Selects which backend turns the advisory text into speech.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TtsProvider {
    /// Google Translate's public `translate_tts` endpoint (MP3 output).
    Google,
    /// Speech disabled: every request fails at the synthesis step with a
    /// clear message instead of silently skipping audio.
    Disabled,
}

impl Default for TtsProvider {
    fn default() -> Self {
        Self::Google
    }
}

// ---------------------------------------------------------------------------
// TtsConfig
// ---------------------------------------------------------------------------

/// Settings for the speech synthesis step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    /// Which backend to use.
    pub provider: TtsProvider,
    /// Base URL of the synthesis service, without a trailing slash.
    pub base_url: String,
    /// Language code sent with every request.  The advisory text is Hindi.
    pub language: String,
    /// Request the slower speaking rate.
    pub slow: bool,
    /// Maximum seconds to wait for each synthesis request.  `0` waits
    /// indefinitely.
    pub timeout_secs: u64,
}

impl TtsConfig {
    /// The per-request timeout, or `None` when `timeout_secs == 0`.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            provider: TtsProvider::default(),
            base_url: "https://translate.google.com".into(),
            language: "hi".into(),
            slow: false,
            timeout_secs: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

/// Settings for the browser-facing HTTP shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Upper bound on a single multipart request (both photos together).
    pub max_upload_mb: usize,
}

impl ServerConfig {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Request body limit in bytes.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8501,
            max_upload_mb: 16,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use krishi_advisor::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP shell settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech synthesis settings.
    #[serde(default)]
    pub tts: TtsConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet so
    /// callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        let default = AppConfig::default();

        assert_eq!(config.server.port, default.server.port);
        assert_eq!(config.tts.language, default.tts.language);
        assert_eq!(config.tts.provider, default.tts.provider);
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8501);
        assert_eq!(cfg.server.max_upload_bytes(), 16 * 1024 * 1024);
        assert_eq!(cfg.tts.provider, TtsProvider::Google);
        assert_eq!(cfg.tts.base_url, "https://translate.google.com");
        assert_eq!(cfg.tts.language, "hi");
        assert!(!cfg.tts.slow);
        assert_eq!(cfg.tts.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn zero_timeout_means_unbounded() {
        let tts = TtsConfig {
            timeout_secs: 0,
            ..TtsConfig::default()
        };
        assert_eq!(tts.timeout(), None);
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let server = ServerConfig {
            host: "0.0.0.0".into(),
            port: 9000,
            max_upload_mb: 1,
        };
        assert_eq!(server.bind_addr(), "0.0.0.0:9000");
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        let mut cfg = AppConfig::default();
        cfg.server.port = 9090;
        cfg.tts.provider = TtsProvider::Disabled;
        cfg.tts.base_url = "http://localhost:5002".into();
        cfg.tts.slow = true;
        cfg.tts.timeout_secs = 5;

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.server.port, 9090);
        assert_eq!(loaded.tts.provider, TtsProvider::Disabled);
        assert_eq!(loaded.tts.base_url, "http://localhost:5002");
        assert!(loaded.tts.slow);
        assert_eq!(loaded.tts.timeout_secs, 5);
    }

    /// A file that only overrides one section keeps defaults for the rest.
    #[test]
    fn partial_file_fills_missing_sections() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 80\nmax_upload_mb = 4\n")
            .expect("write");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(loaded.server.host, "0.0.0.0");
        assert_eq!(loaded.server.port, 80);
        assert_eq!(loaded.tts.language, "hi");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "server = [[[").expect("write");

        assert!(AppConfig::load_from(&path).is_err());
    }
}
