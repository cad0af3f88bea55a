//! Result of one advisory run.

use base64::Engine;
use serde::Serialize;

use crate::vision::{CloudLabel, MoistureLabel};

/// Everything the presentation layer shows for one soil/sky pair.
#[derive(Debug, Clone)]
pub struct AdvisoryReport {
    pub moisture: MoistureLabel,
    pub cloud: CloudLabel,
    /// Hindi advisory text, including the trailing label summary.
    pub advice: String,
    /// Spoken advisory (MP3).
    pub audio: Vec<u8>,
}

impl AdvisoryReport {
    /// The MP3 as a `data:` URL for an inline `<audio>` element.
    pub fn audio_data_url(&self) -> String {
        format!("data:audio/mpeg;base64,{}", self.audio_base64())
    }

    pub fn audio_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.audio)
    }

    /// JSON-friendly view used by `POST /api/advise`.
    pub fn to_json(&self) -> AdvisoryJson {
        AdvisoryJson {
            moisture: self.moisture,
            moisture_label: self.moisture.label(),
            cloud: self.cloud,
            cloud_label: self.cloud.label(),
            advice: self.advice.clone(),
            audio_base64: self.audio_base64(),
        }
    }
}

/// Serialised form of [`AdvisoryReport`].
#[derive(Debug, Serialize)]
pub struct AdvisoryJson {
    pub moisture: MoistureLabel,
    pub moisture_label: &'static str,
    pub cloud: CloudLabel,
    pub cloud_label: &'static str,
    pub advice: String,
    pub audio_base64: String,
}
