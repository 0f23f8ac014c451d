//! Application state shared across handlers

use std::sync::Arc;

use application::{VoiceChatService, ports::PortraitPort};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Voice conversation pipeline (transcription + completion)
    pub voice_chat: Arc<VoiceChatService>,
    /// Portrait generation backend
    pub portraits: Arc<dyn PortraitPort>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
