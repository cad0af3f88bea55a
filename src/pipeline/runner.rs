//! Pipeline runner — classify → compose → synthesize → temp file → report.
//!
//! Decoding and averaging pixels is CPU-bound, so it runs on
//! `tokio::task::spawn_blocking`; the speech request is awaited on the
//! runtime.  The first failure ends the run; nothing is retried and no
//! partial report is produced.

use std::sync::Arc;

use thiserror::Error;

use crate::advisory::compose_advisory;
use crate::config::AppConfig;
use crate::tts::{synthesizer_from_config, write_temp_audio, SpeechSynthesizer, TtsError};
use crate::vision::{
    classify_cloud, classify_moisture, decode_rgb, ChannelMeans, CloudLabel, MoistureLabel,
    VisionError,
};

use super::report::AdvisoryReport;

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Errors that can end an advisory run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The soil photo could not be used.
    #[error("soil photo rejected: {0}")]
    Soil(VisionError),

    /// The sky photo could not be used.
    #[error("sky photo rejected: {0}")]
    Sky(VisionError),

    /// Speech synthesis or the temporary audio file failed.
    #[error("speech synthesis failed: {0}")]
    Speech(#[from] TtsError),

    /// Internal / unexpected error (e.g. tokio join failure).
    #[error("internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// `true` when the caller sent unusable input rather than the pipeline
    /// failing on its own.
    pub fn is_bad_input(&self) -> bool {
        matches!(self, PipelineError::Soil(_) | PipelineError::Sky(_))
    }
}

// ---------------------------------------------------------------------------
// classify_photos
// ---------------------------------------------------------------------------

/// Decode both photos and classify them.  Blocking; call from
/// `spawn_blocking` inside async code.
pub fn classify_photos(
    soil: &[u8],
    sky: &[u8],
) -> Result<(MoistureLabel, CloudLabel), PipelineError> {
    let soil_means = decode_rgb(soil)
        .and_then(|img| ChannelMeans::of(&img))
        .map_err(PipelineError::Soil)?;
    let sky_means = decode_rgb(sky)
        .and_then(|img| ChannelMeans::of(&img))
        .map_err(PipelineError::Sky)?;

    log::debug!("pipeline: soil means {soil_means:?}, sky means {sky_means:?}");

    Ok((classify_moisture(&soil_means), classify_cloud(&sky_means)))
}

// ---------------------------------------------------------------------------
// AdvisoryPipeline
// ---------------------------------------------------------------------------

/// Runs the full photo → spoken advisory pipeline.
pub struct AdvisoryPipeline {
    tts: Arc<dyn SpeechSynthesizer>,
    language: String,
}

impl AdvisoryPipeline {
    /// Create a pipeline that speaks through `tts` in `language`.
    pub fn new(tts: Arc<dyn SpeechSynthesizer>, language: impl Into<String>) -> Self {
        Self {
            tts,
            language: language.into(),
        }
    }

    /// Build the pipeline with the synthesizer selected in `config.tts`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            synthesizer_from_config(&config.tts),
            config.tts.language.clone(),
        )
    }

    /// Language code passed to the synthesizer.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Run every stage for one soil/sky pair.
    ///
    /// The temporary audio file is removed before this returns, whether or
    /// not reading it back succeeded.
    pub async fn run(&self, soil: Vec<u8>, sky: Vec<u8>) -> Result<AdvisoryReport, PipelineError> {
        // ── 1. Classify (blocking pool) ──────────────────────────────────
        let (moisture, cloud) =
            tokio::task::spawn_blocking(move || classify_photos(&soil, &sky))
                .await
                .map_err(|e| PipelineError::Internal(e.to_string()))??;

        log::info!("pipeline: moisture={moisture:?} cloud={cloud:?}");

        // ── 2. Compose ───────────────────────────────────────────────────
        let advice = compose_advisory(moisture, cloud);

        // ── 3. Synthesize ────────────────────────────────────────────────
        let mp3 = self.tts.synthesize(&advice, &self.language).await?;

        // ── 4. Temp file round trip, always cleaned up ───────────────────
        let mut artifact = write_temp_audio(&mp3)?;
        let audio = artifact.read();
        if let Err(e) = artifact.cleanup() {
            log::warn!(
                "pipeline: failed to delete {}: {e}",
                artifact.path().display()
            );
        }
        let audio = audio.map_err(TtsError::from)?;

        Ok(AdvisoryReport {
            moisture,
            cloud,
            advice,
            audio,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
