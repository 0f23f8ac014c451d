//! Wire types for the image-generation API

use serde::{Deserialize, Serialize};

/// Image generation request body
#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    /// Text prompt describing the image
    pub prompt: &'a str,
    /// Number of images to generate
    pub n: u32,
    /// Image dimensions, e.g. "256x256"
    pub size: &'a str,
}

/// Image generation response body
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    /// Generated images
    pub data: Vec<GeneratedImage>,
}

/// A single generated image entry
#[derive(Debug, Deserialize)]
pub struct GeneratedImage {
    /// URL where the image bytes can be downloaded
    pub url: String,
}
