//! Speech adapter - Implements SpeechPort using the ai_speech crate
//!
//! Runs the full normalization pipeline for one upload: decode the blob to
//! PCM WAV, hold the waveform in a request-scoped temp file, transcribe it.
//! The temp file is gone by the time this adapter returns, on success and
//! failure alike. A blob that cannot be decoded fails before any external
//! API call.

use ai_speech::{AudioConverter, ScopedWav, SpeechConfig, SpeechError, WhisperTranscriber};
use application::error::ApplicationError;
use application::ports::{SpeechPort, TranscriptionResult};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter for speech services using the ai_speech crate
pub struct SpeechAdapter {
    converter: AudioConverter,
    transcriber: WhisperTranscriber,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("transcriber", &"WhisperTranscriber")
            .finish()
    }
}

impl SpeechAdapter {
    /// Create a new speech adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the transcriber configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let converter = match &config.ffmpeg_path {
            Some(path) => AudioConverter::with_ffmpeg_path(path.clone()),
            None => AudioConverter::new(),
        };

        let transcriber = WhisperTranscriber::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self {
            converter,
            transcriber,
        })
    }

    /// Map speech error to application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::DecodeFailed(e) => {
                ApplicationError::InvalidOperation(format!("Undecodable audio: {e}"))
            },
            SpeechError::RateLimited => ApplicationError::RateLimited,
            SpeechError::ScratchFile(e) => ApplicationError::Internal(e),
            SpeechError::ConnectionFailed(e)
            | SpeechError::RequestFailed(e)
            | SpeechError::TranscriptionFailed(e)
            | SpeechError::InvalidResponse(e) => ApplicationError::Transcription(e),
            SpeechError::Timeout(ms) => {
                ApplicationError::Transcription(format!("timeout after {ms}ms"))
            },
            SpeechError::ModelNotAvailable(m) => {
                ApplicationError::Transcription(format!("model not available: {m}"))
            },
        }
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, audio), fields(audio_size = audio.len()))]
    async fn transcribe_voice(
        &self,
        audio: Vec<u8>,
    ) -> Result<TranscriptionResult, ApplicationError> {
        // Decode failures abort here, before touching the network
        let wav_bytes = self
            .converter
            .convert_to_wav(&audio)
            .await
            .map_err(Self::map_error)?;

        let wav = ScopedWav::write(&wav_bytes).map_err(Self::map_error)?;

        debug!(wav_size = wav_bytes.len(), "Waveform staged for transcription");

        let transcription = self
            .transcriber
            .transcribe_wav(wav.path())
            .await
            .map_err(Self::map_error)?;
        // `wav` drops here and the temp file is removed

        Ok(TranscriptionResult {
            text: transcription.text,
            language: transcription.language,
            duration_ms: transcription.duration_ms,
        })
    }
}
