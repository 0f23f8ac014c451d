//! Configuration for speech processing

use serde::{Deserialize, Serialize};

/// Configuration for audio normalization and transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// OpenAI API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// OpenAI API base URL (for custom endpoints)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Speech-to-text model
    #[serde(default = "default_model")]
    pub model: String,

    /// Language hint passed to the transcription API (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,

    /// Decoding temperature; 0 keeps transcripts deterministic
    #[serde(default)]
    pub temperature: f32,

    /// Style-priming prompt describing expected punctuation conventions
    #[serde(default = "default_style_prompt")]
    pub style_prompt: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// FFmpeg binary path override (defaults to "ffmpeg" in PATH)
    #[serde(default)]
    pub ffmpeg_path: Option<String>,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "whisper-1".to_string()
}

fn default_language() -> String {
    "ja".to_string()
}

fn default_style_prompt() -> String {
    "会話内容には句読点や空白が含まれます。「、」「。」「あぁ、、」「 」".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            language: default_language(),
            temperature: 0.0,
            style_prompt: default_style_prompt(),
            timeout_ms: default_timeout_ms(),
            ffmpeg_path: None,
        }
    }
}

impl SpeechConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err("API key is required for transcription".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            ));
        }

        Ok(())
    }
}
