//! `GoogleTts` — speech via Google Translate's `translate_tts` endpoint.
//!
//! The endpoint takes one short piece of text per GET request and answers
//! with an MP3 body.  Longer text is split with [`split_for_tts`] and the
//! MP3 bodies are concatenated in order, which players handle as one stream.
//! All connection details come from [`TtsConfig`].

use async_trait::async_trait;
use reqwest::header::{REFERER, USER_AGENT};

use crate::config::TtsConfig;
use crate::tts::chunk::{split_for_tts, MAX_CHUNK_CHARS};
use crate::tts::synthesizer::{SpeechSynthesizer, TtsError};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

// ---------------------------------------------------------------------------
// GoogleTts
// ---------------------------------------------------------------------------

/// Calls `{base_url}/translate_tts` once per text chunk.
pub struct GoogleTts {
    client: reqwest::Client,
    config: TtsConfig,
}

impl GoogleTts {
    /// Build a `GoogleTts` from application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs` (none when `0`).  A default client is used as
    /// a last resort if the builder fails.
    pub fn from_config(config: &TtsConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_tts", self.config.base_url.trim_end_matches('/'))
    }

    /// Query string for chunk `idx` of `total`.
    fn chunk_query(
        &self,
        chunk: &str,
        idx: usize,
        total: usize,
        language: &str,
    ) -> Vec<(&'static str, String)> {
        let speed = if self.config.slow { "0.3" } else { "1" };
        vec![
            ("ie", "UTF-8".to_string()),
            ("q", chunk.to_string()),
            ("tl", language.to_string()),
            ("client", "tw-ob".to_string()),
            ("ttsspeed", speed.to_string()),
            ("total", total.to_string()),
            ("idx", idx.to_string()),
            ("textlen", chunk.chars().count().to_string()),
        ]
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    /// Speak `text` in `language`, returning concatenated MP3 data.
    ///
    /// Stops at the first failing chunk; nothing is retried.
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, TtsError> {
        let chunks = split_for_tts(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(TtsError::EmptyText);
        }

        let url = self.endpoint();
        let total = chunks.len();
        let mut audio = Vec::new();

        for (idx, chunk) in chunks.iter().enumerate() {
            log::debug!("tts: requesting chunk {}/{} ({} chars)", idx + 1, total, chunk.chars().count());

            let response = self
                .client
                .get(&url)
                .query(&self.chunk_query(chunk, idx, total, language))
                .header(USER_AGENT, BROWSER_USER_AGENT)
                .header(REFERER, "http://translate.google.com/")
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(TtsError::Status {
                    status: status.as_u16(),
                    chunk: idx,
                });
            }

            let body = response.bytes().await?;
            if body.is_empty() {
                return Err(TtsError::EmptyAudio);
            }
            audio.extend_from_slice(&body);
        }

        log::debug!("tts: synthesized {} bytes in {} chunk(s)", audio.len(), total);
        Ok(audio)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
