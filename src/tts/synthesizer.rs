//! Core `SpeechSynthesizer` trait, error type and backend selection.
//!
//! [`SpeechSynthesizer`] is the seam the pipeline depends on.  It is
//! object-safe and `Send + Sync` so it can be held behind an
//! `Arc<dyn SpeechSynthesizer>` in the shared web state.
//!
//! [`MockSynthesizer`] (available under `#[cfg(test)]`) returns canned audio
//! or a canned failure, so the pipeline can be tested without the network.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{TtsConfig, TtsProvider};
use crate::tts::google::GoogleTts;

// ---------------------------------------------------------------------------
// TtsError
// ---------------------------------------------------------------------------

/// Errors that can occur while producing the spoken advisory.
#[derive(Debug, Error)]
pub enum TtsError {
    /// Speech output was switched off in `settings.toml`.
    #[error("speech synthesis is disabled in settings")]
    Disabled,

    /// Nothing speakable was left after cleaning the text.
    #[error("nothing to synthesize: text is empty")]
    EmptyText,

    /// HTTP transport or connection error.
    #[error("speech request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("speech request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("speech service returned HTTP {status} for chunk {chunk}")]
    Status { status: u16, chunk: usize },

    /// The service answered 2xx with an empty body.
    #[error("speech service returned no audio")]
    EmptyAudio,

    /// Writing or reading the temporary audio file failed.
    #[error("temporary audio file error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for TtsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TtsError::Timeout
        } else {
            TtsError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// SpeechSynthesizer trait
// ---------------------------------------------------------------------------

/// Async interface for text-to-speech backends.
///
/// # Arguments
/// * `text`     – Text to speak.
/// * `language` – ISO-639-1 language code (`"hi"` for the advisory).
///
/// Returns the encoded audio (MP3) on success.  Implementations do not
/// retry; any failure is returned to the caller as-is.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, TtsError>;
}

// Compile-time assertion: Box<dyn SpeechSynthesizer> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechSynthesizer>) {}
};

// ---------------------------------------------------------------------------
// DisabledTts
// ---------------------------------------------------------------------------

/// Backend used when `tts.provider = "Disabled"`.  Always fails.
#[derive(Debug, Default)]
pub struct DisabledTts;

#[async_trait]
impl SpeechSynthesizer for DisabledTts {
    async fn synthesize(&self, _text: &str, _language: &str) -> Result<Vec<u8>, TtsError> {
        Err(TtsError::Disabled)
    }
}

// ---------------------------------------------------------------------------
// Backend selection
// ---------------------------------------------------------------------------

/// Build the synthesizer selected by `config.provider`.
pub fn synthesizer_from_config(config: &TtsConfig) -> Arc<dyn SpeechSynthesizer> {
    match config.provider {
        TtsProvider::Google => Arc::new(GoogleTts::from_config(config)),
        TtsProvider::Disabled => {
            log::warn!("tts: speech synthesis disabled; every advisory request will fail");
            Arc::new(DisabledTts)
        }
    }
}

// ---------------------------------------------------------------------------
// MockSynthesizer (test only)
// ---------------------------------------------------------------------------

/// Test double: returns fixed audio bytes or a fixed request error, and
/// records every `(text, language)` pair it was asked to speak.
#[cfg(test)]
pub struct MockSynthesizer {
    response: Result<Vec<u8>, String>,
    calls: std::sync::Mutex<Vec<(String, String)>>,
}

#[cfg(test)]
impl MockSynthesizer {
    /// Always succeeds with `audio`.
    pub fn ok(audio: &[u8]) -> Self {
        Self {
            response: Ok(audio.to_vec()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Always fails with `TtsError::Request(message)`.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Every `(text, language)` received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, TtsError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), language.to_string()));
        match &self.response {
            Ok(audio) => Ok(audio.clone()),
            Err(msg) => Err(TtsError::Request(msg.clone())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
