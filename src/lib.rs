//! Krishi advisor: soil and sky photos in, spoken Hindi farming advice out.
//!
//! * [`vision`] — per-channel mean color and the moisture / cloud heuristics.
//! * [`advisory`] — fixed Hindi advisory built from the two labels.
//! * [`tts`] — speech synthesis behind the [`tts::SpeechSynthesizer`] trait,
//!   plus the temporary MP3 file it is written to.
//! * [`pipeline`] — runs the stages above for one pair of photos.
//! * [`web`] — axum router serving the capture and result pages.
//! * [`config`] — `settings.toml` loading and defaults.

pub mod advisory;
pub mod config;
pub mod pipeline;
pub mod tts;
pub mod vision;
pub mod web;
