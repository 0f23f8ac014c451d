//! Portrait port - Interface for character portrait generation

use async_trait::async_trait;
use domain::Character;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for generating and persisting a character portrait
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PortraitPort: Send + Sync {
    /// Generate a portrait for the character and return its public URL
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ImageGeneration` if the generation call,
    /// the download, or persisting the image fails.
    async fn generate(&self, character: Character) -> Result<String, ApplicationError>;
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

    #[tokio::test]
    async fn mock_portrait_port_generates() {
        let mut mock = MockPortraitPort::new();
        mock.expect_generate().returning(|character| {
            Ok(format!(
                "http://localhost:8080/static/characters/{}/image.png",
                character.name
            ))
        });

        let url = mock.generate(sample_character()).await.unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/static/characters/Aiko/image.png"
        );
    }

    #[tokio::test]
    async fn mock_portrait_port_propagates_errors() {
        let mut mock = MockPortraitPort::new();
        mock.expect_generate()
            .returning(|_| Err(ApplicationError::ImageGeneration("status 404".to_string())));

        let result = mock.generate(sample_character()).await;
        assert!(matches!(result, Err(ApplicationError::ImageGeneration(_))));
    }
}
