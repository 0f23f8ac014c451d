//! Infrastructure layer - Configuration and port adapters
//!
//! Binds the external-API client crates (`ai_speech`, `ai_chat`,
//! `integration_image`) to the application ports, and owns the process
//! configuration loaded from file and environment.

pub mod adapters;
pub mod config;

pub use adapters::{ChatAdapter, PortraitAdapter, SpeechAdapter};
pub use config::{AppConfig, ServerConfig};
