//! Portrait adapter - Implements PortraitPort using the integration_image crate

use application::error::ApplicationError;
use application::ports::PortraitPort;
use async_trait::async_trait;
use domain::Character;
use integration_image::{ImageConfig, ImageError, PortraitClient};
use tracing::instrument;

use crate::config::ServerConfig;

/// Adapter for portrait generation
pub struct PortraitAdapter {
    client: PortraitClient,
    server: ServerConfig,
}

impl std::fmt::Debug for PortraitAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortraitAdapter")
            .field("public_url", &self.server.public_url)
            .finish()
    }
}

impl PortraitAdapter {
    /// Create a new portrait adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the client configuration is invalid.
    pub fn new(config: ImageConfig, server: ServerConfig) -> Result<Self, ApplicationError> {
        let client = PortraitClient::new(config)
            .map_err(|e: ImageError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { client, server })
    }

    /// Map image error to application error
    fn map_error(err: ImageError) -> ApplicationError {
        match err {
            ImageError::Configuration(e) => ApplicationError::Configuration(e),
            ImageError::Persist(e) => ApplicationError::Internal(e),
            other => ApplicationError::ImageGeneration(other.to_string()),
        }
    }
}

#[async_trait]
impl PortraitPort for PortraitAdapter {
    #[instrument(skip(self, character), fields(name = %character.name))]
    async fn generate(&self, character: Character) -> Result<String, ApplicationError> {
        self.client
            .generate(&character)
            .await
            .map_err(Self::map_error)?;

        Ok(self.server.static_url(&character.portrait_relative_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

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
        let result = PortraitAdapter::new(ImageConfig::default(), ServerConfig::default());
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn error_mapping_fetch_failure() {
        let err = PortraitAdapter::map_error(ImageError::FetchFailed { status: 404 });
        assert!(matches!(err, ApplicationError::ImageGeneration(_)));
    }

    #[test]
    fn error_mapping_persist_failure() {
        let err = PortraitAdapter::map_error(ImageError::Persist("read-only".to_string()));
        assert!(matches!(err, ApplicationError::Internal(_)));
    }

    #[tokio::test]
    async fn generate_returns_public_url() {
        let mock_server = MockServer::start().await;
        let output_dir = tempfile::tempdir().unwrap();

        let image_url = format!("{}/img.png", mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"url": image_url}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/img.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3]))
            .expect(1)
            .mount(&mock_server)
            .await;

        let image_config = ImageConfig {
            api_key: Some("test-key".to_string()),
            base_url: mock_server.uri(),
            output_dir: output_dir.path().to_path_buf(),
            ..Default::default()
        };
        let adapter = PortraitAdapter::new(image_config, ServerConfig::default()).unwrap();

        let url = adapter.generate(sample_character()).await.unwrap();

        assert_eq!(
            url,
            "http://localhost:8080/static/characters/Aiko/image.png"
        );
        assert!(output_dir.path().join("characters/Aiko/image.png").exists());
    }

    #[tokio::test]
    async fn failed_download_is_an_image_generation_error() {
        let mock_server = MockServer::start().await;
        let output_dir = tempfile::tempdir().unwrap();

        let image_url = format!("{}/gone.png", mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"url": image_url}]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/gone.png"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let image_config = ImageConfig {
            api_key: Some("test-key".to_string()),
            base_url: mock_server.uri(),
            output_dir: output_dir.path().to_path_buf(),
            ..Default::default()
        };
        let adapter = PortraitAdapter::new(image_config, ServerConfig::default()).unwrap();

        let result = adapter.generate(sample_character()).await;

        assert!(matches!(result, Err(ApplicationError::ImageGeneration(_))));
    }
}
