//! Chat port - Interface for the chat-completion backend

use async_trait::async_trait;
use domain::ChatMessage;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for sending an ordered message sequence to a completion backend
///
/// Implementations carry their own retry policy; an error returned here
/// means the attempts were already exhausted. Callers decide whether to
/// degrade or surface it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Send the messages and return the assistant's reply text
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ChatCompletion` (or `RateLimited`) once
    /// the underlying retry policy is exhausted.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_chat_port_completes() {
        let mut mock = MockChatPort::new();
        mock.expect_complete()
            .returning(|_| Ok("assistant reply".to_string()));

        let reply = mock
            .complete(vec![ChatMessage::system("s"), ChatMessage::user("u")])
            .await
            .unwrap();
        assert_eq!(reply, "assistant reply");
    }

    #[tokio::test]
    async fn mock_chat_port_sees_message_order() {
        let mut mock = MockChatPort::new();
        mock.expect_complete()
            .withf(|messages| {
                messages.len() == 2
                    && messages[0].role == domain::MessageRole::System
                    && messages[1].role == domain::MessageRole::User
            })
            .returning(|_| Ok("ok".to_string()));

        let result = mock
            .complete(vec![ChatMessage::system("s"), ChatMessage::user("u")])
            .await;
        assert!(result.is_ok());
    }
}
