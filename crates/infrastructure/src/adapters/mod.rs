//! Port adapters binding the client crates to the application layer

pub mod chat_adapter;
pub mod portrait_adapter;
pub mod speech_adapter;

pub use chat_adapter::ChatAdapter;
pub use portrait_adapter::PortraitAdapter;
pub use speech_adapter::SpeechAdapter;
