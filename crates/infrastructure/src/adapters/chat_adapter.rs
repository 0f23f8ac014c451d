//! Chat adapter - Implements ChatPort using the ai_chat crate

use ai_chat::{ChatCompletionClient, ChatConfig, ChatError};
use application::error::ApplicationError;
use application::ports::ChatPort;
use async_trait::async_trait;
use domain::ChatMessage;
use tracing::instrument;

/// Adapter for the chat-completion backend
///
/// The wrapped client already applies the configured retry policy; errors
/// surfacing here mean the attempts were exhausted and are passed through
/// untouched for the boundary to handle.
pub struct ChatAdapter {
    client: ChatCompletionClient,
}

impl std::fmt::Debug for ChatAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatAdapter")
            .field("model", &self.client.model_name())
            .finish()
    }
}

impl ChatAdapter {
    /// Create a new chat adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the client configuration is invalid.
    pub fn new(config: ChatConfig) -> Result<Self, ApplicationError> {
        let client = ChatCompletionClient::new(config)
            .map_err(|e: ChatError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { client })
    }

    /// Map chat error to application error
    fn map_error(err: ChatError) -> ApplicationError {
        match err {
            ChatError::Configuration(e) => ApplicationError::Configuration(e),
            ChatError::RateLimited => ApplicationError::RateLimited,
            other => ApplicationError::ChatCompletion(other.to_string()),
        }
    }
}

#[async_trait]
impl ChatPort for ChatAdapter {
    #[instrument(skip(self, messages), fields(message_count = messages.len()))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ApplicationError> {
        self.client
            .complete(&messages)
            .await
            .map_err(Self::map_error)
    }
}
