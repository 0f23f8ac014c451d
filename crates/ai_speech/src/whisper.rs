//! OpenAI Whisper transcription client
//!
//! Sends a normalized WAV file to the `/audio/transcriptions` endpoint with
//! a fixed language hint, deterministic temperature, and a style-priming
//! prompt describing the expected punctuation. The returned text is cleaned
//! so that every sentence ends on its own line.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::types::{Transcription, break_sentences};

/// Speech-to-text client for the OpenAI Whisper API
#[derive(Debug, Clone)]
pub struct WhisperTranscriber {
    client: Client,
    config: SpeechConfig,
}

/// Whisper transcription response (verbose fields optional)
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// OpenAI API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    code: Option<String>,
}

impl WhisperTranscriber {
    /// Create a new transcriber
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Get the API key
    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    /// Build the transcription endpoint URL
    fn stt_url(&self) -> String {
        format!("{}/audio/transcriptions", self.config.base_url)
    }

    /// Name of the configured transcription model
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    /// Transcribe a WAV file on disk
    ///
    /// # Errors
    ///
    /// Returns a `SpeechError` if the file cannot be read, the request
    /// fails, or the service reports an error. Callers wanting the legacy
    /// degrade-to-empty behavior handle the error themselves.
    #[instrument(skip(self), fields(path = %wav_path.display()))]
    pub async fn transcribe_wav(&self, wav_path: &Path) -> Result<Transcription, SpeechError> {
        let data = tokio::fs::read(wav_path)
            .await
            .map_err(|e| SpeechError::ScratchFile(format!("Failed to read waveform: {e}")))?;

        if data.is_empty() {
            return Err(SpeechError::DecodeFailed("Waveform is empty".to_string()));
        }

        debug!(audio_size = data.len(), "Transcribing audio with Whisper");

        let file_part = Part::bytes(data)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| SpeechError::InvalidResponse(format!("Invalid MIME type: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone())
            .text("language", self.config.language.clone())
            .text("temperature", self.config.temperature.to_string())
            .text("prompt", self.config.style_prompt.clone());

        let response = self
            .client
            .post(self.stt_url())
            .bearer_auth(self.api_key())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return match api_error.error.code.as_deref() {
                    Some("rate_limit_exceeded") => Err(SpeechError::RateLimited),
                    Some("model_not_found") => {
                        Err(SpeechError::ModelNotAvailable(self.config.model.clone()))
                    },
                    _ => Err(SpeechError::TranscriptionFailed(api_error.error.message)),
                };
            }

            warn!(status = %status, "Transcription request failed");
            return Err(SpeechError::TranscriptionFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let whisper_response: WhisperResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        debug!(
            text_len = whisper_response.text.len(),
            language = ?whisper_response.language,
            "Transcription complete"
        );

        let mut transcription = Transcription::new(break_sentences(&whisper_response.text))
            .with_language(
                whisper_response
                    .language
                    .unwrap_or_else(|| self.config.language.clone()),
            );

        if let Some(duration) = whisper_response.duration {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let duration_ms = (duration * 1000.0) as u64;
            transcription = transcription.with_duration(duration_ms);
        }

        Ok(transcription)
    }
}
