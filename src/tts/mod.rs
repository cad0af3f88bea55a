//! Text-to-speech for the advisory text.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              SpeechSynthesizer (trait)                │
//! │                                                      │
//! │   ┌──────────────┐    ┌──────────────┐              │
//! │   │ split_for_tts│───▶│  GoogleTts   │  MP3 chunks  │
//! │   │ ≤100 chars   │    │ translate_tts│──────┐       │
//! │   └──────────────┘    └──────────────┘      │       │
//! │                                             ▼       │
//! │                              ┌────────────────────┐ │
//! │                              │ write_temp_audio() │ │
//! │                              │ → AudioArtifact    │ │
//! │                              └────────────────────┘ │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use krishi_advisor::config::TtsConfig;
//! use krishi_advisor::tts::{write_temp_audio, GoogleTts, SpeechSynthesizer};
//!
//! # async fn example() -> Result<(), krishi_advisor::tts::TtsError> {
//! let tts = GoogleTts::from_config(&TtsConfig::default());
//! let mp3 = tts.synthesize("मौसम सामान्य है", "hi").await?;
//!
//! let mut artifact = write_temp_audio(&mp3)?;
//! println!("{}", artifact.path().display());
//! artifact.cleanup()?; // safe to call twice
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod chunk;
pub mod google;
pub mod synthesizer;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use artifact::{write_temp_audio, AudioArtifact};
pub use chunk::{split_for_tts, MAX_CHUNK_CHARS};
pub use google::GoogleTts;
pub use synthesizer::{synthesizer_from_config, DisabledTts, SpeechSynthesizer, TtsError};

// test-only re-export so the pipeline and web tests can use the mock
// without reaching into `tts::synthesizer`.
#[cfg(test)]
pub use synthesizer::MockSynthesizer;
