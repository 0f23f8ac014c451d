//! OpenAI-compatible chat-completion client

use std::time::Duration;

use domain::ChatMessage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::retry::with_retry;

/// Chat-completion client with a bounded retry policy
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    client: Client,
    config: ChatConfig,
}

/// Wire-format chat request
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Wire-format chat response
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
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

impl ChatCompletionClient {
    /// Create a new chat-completion client
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Configuration` if the configuration is invalid.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        config.validate().map_err(ChatError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ChatError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get the API key
    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    /// Build the completion endpoint URL
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Name of the configured completion model
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.config.model
    }

    /// Send a message sequence and return the first choice's content
    ///
    /// The call runs under the configured retry policy; between attempts the
    /// delay grows exponentially with jitter. Once the attempts are
    /// exhausted, the final error is returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns the last `ChatError` after all attempts failed.
    #[instrument(skip(self, messages), fields(model = %self.config.model, message_count = messages.len()))]
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let outcome = with_retry(&self.config.retry, || self.complete_once(messages)).await;

        if outcome.attempts > 1 {
            debug!(
                attempts = outcome.attempts,
                success = outcome.is_ok(),
                "Completion finished after retries"
            );
        }

        outcome.into_result()
    }

    /// Single completion attempt without retry
    async fn complete_once(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let request = CompletionRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
        };

        debug!("Sending completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return match api_error.error.code.as_deref() {
                    Some("rate_limit_exceeded") => Err(ChatError::RateLimited),
                    _ => Err(ChatError::ServerError(api_error.error.message)),
                };
            }

            warn!(status = %status, "Completion request failed");
            return Err(ChatError::ServerError(format!(
                "Status {status}: {error_body}"
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ChatError::InvalidResponse("No choices returned".to_string()))?;

        debug!(response_len = content.len(), "Completion received");

        Ok(content)
    }
}
