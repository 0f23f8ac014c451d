//! Character portrait integration
//!
//! Client for an OpenAI-compatible image-generation API. Builds a portrait
//! prompt from a character record, requests a single 256x256 image,
//! downloads the result, and persists it under the static portrait tree.

pub mod client;
mod models;

pub use client::{ImageConfig, ImageError, PortraitClient};
