//! Application layer - Ports and orchestration services
//!
//! Defines the ports the infrastructure adapters implement (speech-to-text,
//! chat completion, portrait generation), the prompt builders, and the
//! service composing them into the voice → transcript → completion pipeline.

pub mod error;
pub mod ports;
pub mod prompts;
pub mod services;

pub use error::ApplicationError;
pub use services::voice_chat::{IntroductionReport, VoiceChatService};
