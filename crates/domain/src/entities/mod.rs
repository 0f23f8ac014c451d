//! Domain entities

pub mod affinity;
pub mod character;
pub mod chat_message;

pub use affinity::AffinityContext;
pub use character::Character;
pub use chat_message::{ChatMessage, MessageRole};
