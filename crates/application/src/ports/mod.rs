//! Port definitions - interfaces implemented by infrastructure adapters

pub mod chat_port;
pub mod portrait_port;
pub mod speech_port;

pub use chat_port::ChatPort;
pub use portrait_port::PortraitPort;
pub use speech_port::{SpeechPort, TranscriptionResult};

#[cfg(test)]
pub use chat_port::MockChatPort;
#[cfg(test)]
pub use portrait_port::MockPortraitPort;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
