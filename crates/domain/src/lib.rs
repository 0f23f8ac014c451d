//! Domain layer - Entities and value types for the Koetomo voice character service
//!
//! This crate has no I/O and no external-service knowledge. It defines the
//! character record, the chat message sequence sent to the completion API,
//! and the strongly-typed role-play context.

pub mod entities;
pub mod errors;

pub use entities::{AffinityContext, Character, ChatMessage, MessageRole};
pub use errors::DomainError;
