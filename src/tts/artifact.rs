//! Temporary MP3 file holding one request's spoken advisory.
//!
//! The file is created with a unique name in the system temp dir, read back
//! by the presentation layer, and removed as soon as the response has been
//! built.  Removal is idempotent: a file that is already gone counts as
//! removed.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::tts::synthesizer::TtsError;

// ---------------------------------------------------------------------------
// AudioArtifact
// ---------------------------------------------------------------------------

/// Owning handle to a temporary audio file.
///
/// Dropping the handle removes the file if [`cleanup`](Self::cleanup) has
/// not already done so.
#[derive(Debug)]
pub struct AudioArtifact {
    path: PathBuf,
    removed: bool,
}

impl AudioArtifact {
    /// Location of the audio file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file back into memory.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }

    /// Delete the file.  Calling this again, or after the file was removed
    /// by someone else, succeeds.
    pub fn cleanup(&mut self) -> io::Result<()> {
        remove_if_exists(&self.path)?;
        self.removed = true;
        Ok(())
    }
}

impl Drop for AudioArtifact {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = remove_if_exists(&self.path) {
            log::warn!("tts: could not remove {}: {e}", self.path.display());
        }
    }
}

/// Write `audio` to a new, uniquely named `.mp3` file in the temp dir.
pub fn write_temp_audio(audio: &[u8]) -> Result<AudioArtifact, TtsError> {
    let mut file = tempfile::Builder::new()
        .prefix("krishi-advice-")
        .suffix(".mp3")
        .tempfile()?;
    file.write_all(audio)?;
    file.flush()?;

    // Detach from tempfile's own auto-delete; AudioArtifact owns removal.
    let (_file, path) = file.keep().map_err(|e| TtsError::Io(e.error))?;
    log::debug!("tts: wrote {} bytes to {}", audio.len(), path.display());

    Ok(AudioArtifact {
        path,
        removed: false,
    })
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
