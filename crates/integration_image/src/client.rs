//! Portrait generation client
//!
//! HTTP client for an OpenAI-compatible `/images/generations` endpoint plus
//! the follow-up download of the generated image bytes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use domain::Character;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{GenerationRequest, GenerationResponse};

/// Portrait client errors
#[derive(Debug, Error)]
pub enum ImageError {
    /// Connection to the image service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the image service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The generation call was rejected by the service
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Downloading the generated image did not return a success status
    #[error("Image download failed with status {status}")]
    FetchFailed {
        /// HTTP status of the failed download
        status: u16,
    },

    /// Failed to parse the service response
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Writing the image to disk failed
    #[error("Failed to persist image: {0}")]
    Persist(String),

    /// Request timeout
    #[error("Image request timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ImageError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Portrait service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// OpenAI API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL (for custom endpoints)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Generated image dimensions
    #[serde(default = "default_size")]
    pub size: String,

    /// Root directory of the static file tree
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_size() -> String {
    "256x256".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("static")
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            size: default_size(),
            output_dir: default_output_dir(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ImageConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err("API key is required for image generation".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Client generating and persisting character portraits
#[derive(Debug, Clone)]
pub struct PortraitClient {
    client: Client,
    config: ImageConfig,
}

impl PortraitClient {
    /// Create a new portrait client
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Configuration` if the configuration is invalid.
    pub fn new(config: ImageConfig) -> Result<Self, ImageError> {
        config.validate().map_err(ImageError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ImageError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build the generation endpoint URL
    fn generations_url(&self) -> String {
        format!("{}/images/generations", self.config.base_url)
    }

    /// Build the portrait prompt for a character
    #[must_use]
    pub fn portrait_prompt(character: &Character) -> String {
        format!(
            "a photo of a game character name:{} age:{} and facing forward, studio light, longshot",
            character.name, character.age
        )
    }

    /// Generate a portrait for the character and persist it on disk
    ///
    /// Requests a single image, downloads the returned URL, and writes the
    /// bytes to `{output_dir}/characters/{name}/image.png`, creating
    /// intermediate directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an `ImageError` if the generation call fails, the response
    /// carries no image, the download returns a non-success status, or the
    /// file cannot be written.
    #[instrument(skip(self, character), fields(name = %character.name))]
    pub async fn generate(&self, character: &Character) -> Result<PathBuf, ImageError> {
        let prompt = Self::portrait_prompt(character);
        let request = GenerationRequest {
            prompt: &prompt,
            n: 1,
            size: &self.config.size,
        };

        debug!("Requesting portrait generation");

        let response = self
            .client
            .post(self.generations_url())
            .bearer_auth(self.config.api_key.as_deref().unwrap_or_default())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageError::GenerationFailed(format!(
                "Status {status}: {body}"
            )));
        }

        let generation: GenerationResponse = response
            .json()
            .await
            .map_err(|e| ImageError::InvalidResponse(e.to_string()))?;

        let image_url = generation
            .data
            .into_iter()
            .next()
            .map(|img| img.url)
            .ok_or_else(|| ImageError::InvalidResponse("No image returned".to_string()))?;

        debug!(url = %image_url, "Downloading generated portrait");

        let download = self.client.get(&image_url).send().await?;
        if !download.status().is_success() {
            return Err(ImageError::FetchFailed {
                status: download.status().as_u16(),
            });
        }

        let bytes = download
            .bytes()
            .await
            .map_err(|e| ImageError::InvalidResponse(format!("Failed to read image: {e}")))?;

        let output_path = self.portrait_path(character);
        self.persist(&output_path, &bytes).await?;

        debug!(path = %output_path.display(), size = bytes.len(), "Portrait written");

        Ok(output_path)
    }

    /// Destination path of a character's portrait
    #[must_use]
    pub fn portrait_path(&self, character: &Character) -> PathBuf {
        self.config.output_dir.join(character.portrait_relative_path())
    }

    /// Write image bytes, creating parent directories as needed
    async fn persist(&self, path: &Path, bytes: &[u8]) -> Result<(), ImageError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ImageError::Persist(format!("create {}: {e}", parent.display())))?;
        }
        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| ImageError::Persist(format!("write {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_character() -> Character {
        Character {
            name: "Aiko".to_string(),
            age: 20,
            profile: "p".to_string(),
            item: "i".to_string(),
            tone: "t".to_string(),
            question: "q".to_string(),
        }
    }

    #[test]
    fn new_fails_without_api_key() {
        let result = PortraitClient::new(ImageConfig::default());
        assert!(matches!(result, Err(ImageError::Configuration(_))));
    }

    #[test]
    fn new_succeeds_with_api_key() {
        let config = ImageConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        assert!(PortraitClient::new(config).is_ok());
    }

    #[test]
    fn portrait_prompt_embeds_name_and_age() {
        let prompt = PortraitClient::portrait_prompt(&sample_character());
        assert_eq!(
            prompt,
            "a photo of a game character name:Aiko age:20 and facing forward, studio light, longshot"
        );
    }

    #[test]
    fn portrait_path_is_under_output_dir() {
        let config = ImageConfig {
            api_key: Some("test-key".to_string()),
            output_dir: PathBuf::from("/srv/static"),
            ..Default::default()
        };
        let client = PortraitClient::new(config).unwrap();
        assert_eq!(
            client.portrait_path(&sample_character()),
            PathBuf::from("/srv/static/characters/Aiko/image.png")
        );
    }

    #[test]
    fn default_config_values() {
        let config = ImageConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.size, "256x256");
        assert_eq!(config.output_dir, PathBuf::from("static"));
        assert_eq!(config.timeout_ms, 60000);
    }

    #[test]
    fn fetch_failed_error_message_carries_status() {
        let err = ImageError::FetchFailed { status: 404 };
        assert_eq!(err.to_string(), "Image download failed with status 404");
    }
}
