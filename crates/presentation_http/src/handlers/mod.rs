//! Request handlers

pub mod characters;
pub mod voice;
