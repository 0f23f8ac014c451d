//! Request-scoped temporary waveform files
//!
//! A normalized WAV must exist on disk for the duration of one request and
//! be gone afterwards, whether the request succeeded or failed. `ScopedWav`
//! owns a uniquely-named temporary file and removes it on drop, so the file
//! cannot leak across requests.

use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::SpeechError;

/// A temporary WAV file tied to the current request scope
#[derive(Debug)]
pub struct ScopedWav {
    file: NamedTempFile,
}

impl ScopedWav {
    /// Write waveform bytes into a fresh uniquely-named `.wav` temp file
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::ScratchFile` if the file cannot be created or
    /// written.
    pub fn write(wav_bytes: &[u8]) -> Result<Self, SpeechError> {
        let mut file = Builder::new()
            .prefix("koetomo-")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| SpeechError::ScratchFile(format!("Failed to create temp file: {e}")))?;

        file.write_all(wav_bytes)
            .map_err(|e| SpeechError::ScratchFile(format!("Failed to write waveform: {e}")))?;
        file.flush()
            .map_err(|e| SpeechError::ScratchFile(format!("Failed to flush waveform: {e}")))?;

        debug!(path = %file.path().display(), size = wav_bytes.len(), "Scoped WAV written");

        Ok(Self { file })
    }

    /// Location of the waveform on disk, valid until this value drops
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
