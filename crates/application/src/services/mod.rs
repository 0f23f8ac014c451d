//! Application services

pub mod voice_chat;

pub use voice_chat::{IntroductionReport, VoiceChatService};
