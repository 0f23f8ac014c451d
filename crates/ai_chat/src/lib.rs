//! AI Chat - Chat-completion client with bounded retry
//!
//! Sends an ordered system+user message sequence to an OpenAI-compatible
//! `/chat/completions` endpoint and returns the first choice's content.
//! Every request runs under an injected retry policy with exponential
//! backoff and jitter; once the attempts are exhausted the final error
//! surfaces to the caller rather than being swallowed here.

pub mod client;
pub mod config;
pub mod error;
pub mod retry;

pub use client::ChatCompletionClient;
pub use config::ChatConfig;
pub use error::ChatError;
pub use retry::{RetryConfig, Retryable, retry, with_retry};
