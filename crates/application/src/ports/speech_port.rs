//! Speech port - Interface for the audio normalization + transcription stack

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a transcription operation
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// Transcribed text, sentence breaks already normalized
    pub text: String,
    /// Language of the transcript (ISO 639-1)
    pub language: Option<String>,
    /// Duration of the audio in milliseconds
    pub duration_ms: Option<u64>,
}

/// Port for turning an uploaded audio blob into text
///
/// Implementations normalize the blob to a canonical waveform in a
/// request-scoped temporary file, transcribe it, and clean the result. A
/// blob that cannot be decoded fails here, before any external API call.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Normalize and transcribe an uploaded audio blob
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` if decoding, normalization, or the
    /// transcription call fails.
    async fn transcribe_voice(
        &self,
        audio: Vec<u8>,
    ) -> Result<TranscriptionResult, ApplicationError>;
}
