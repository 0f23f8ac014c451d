//! Audio format normalizer
//!
//! Re-encodes an uploaded audio blob of arbitrary container/codec into
//! 16-bit PCM WAV suitable for the transcription API.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::error::SpeechError;

/// Audio converter producing Whisper-ready WAV data
///
/// Uses FFmpeg for decoding. FFmpeg must be installed on the system.
#[derive(Debug, Clone, Default)]
pub struct AudioConverter {
    /// FFmpeg binary path (defaults to "ffmpeg" in PATH)
    ffmpeg_path: Option<String>,
}

impl AudioConverter {
    /// Create a new audio converter with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self { ffmpeg_path: None }
    }

    /// Create a new audio converter with a custom FFmpeg path
    #[must_use]
    pub fn with_ffmpeg_path(path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: Some(path.into()),
        }
    }

    /// Get the FFmpeg binary path
    fn ffmpeg_path(&self) -> &str {
        self.ffmpeg_path.as_deref().unwrap_or("ffmpeg")
    }

    /// Check if FFmpeg is available on the system
    #[instrument(skip(self))]
    pub async fn is_available(&self) -> bool {
        Command::new(self.ffmpeg_path())
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }

    /// Decode the input bytes and re-encode as 16-bit PCM WAV (16 kHz mono)
    ///
    /// FFmpeg probes the container itself, so any format it understands is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::DecodeFailed` if FFmpeg cannot be spawned,
    /// cannot decode the input, or produces empty output.
    #[instrument(skip(self, input), fields(input_size = input.len()))]
    pub async fn convert_to_wav(&self, input: &[u8]) -> Result<Vec<u8>, SpeechError> {
        debug!("Normalizing uploaded audio to PCM WAV");

        // -i pipe:0 reads from stdin, pipe:1 writes to stdout
        let mut cmd = Command::new(self.ffmpeg_path());
        cmd.arg("-i")
            .arg("pipe:0")
            .arg("-f")
            .arg("wav")
            // PCM 16-bit, mono, 16kHz for speech processing
            .args(["-codec:a", "pcm_s16le", "-ar", "16000", "-ac", "1"])
            .arg("-y")
            .arg("-loglevel")
            .arg("error")
            .arg("pipe:1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd
            .spawn()
            .map_err(|e| SpeechError::DecodeFailed(format!("Failed to spawn FFmpeg: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input)
                .await
                .map_err(|e| SpeechError::DecodeFailed(format!("Failed to feed FFmpeg: {e}")))?;
            // Drop stdin to signal EOF
            drop(stdin);
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| SpeechError::DecodeFailed(format!("Failed to wait for FFmpeg: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::DecodeFailed(format!(
                "FFmpeg conversion failed: {stderr}"
            )));
        }

        if output.stdout.is_empty() {
            return Err(SpeechError::DecodeFailed(
                "FFmpeg produced empty output".to_string(),
            ));
        }

        debug!(
            "Normalization successful, output size: {} bytes",
            output.stdout.len()
        );

        Ok(output.stdout)
    }
}
