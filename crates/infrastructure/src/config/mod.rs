//! Application configuration
//!
//! Built once at process start and threaded into each component; nothing
//! here is globally mutable. Sources are layered: defaults, then an
//! optional `config.toml`, then environment variables with the `KOETOMO`
//! prefix (e.g. `KOETOMO_SERVER_PORT`, `KOETOMO_CHAT_API_KEY`).

mod server;

use ai_chat::ChatConfig;
use ai_speech::SpeechConfig;
use integration_image::ImageConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Speech-to-text configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Chat-completion configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Portrait generation configuration
    #[serde(default)]
    pub image: ImageConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` if a source cannot be read or the
    /// merged document does not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if it exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., KOETOMO_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("KOETOMO")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Align the derived settings that span sections
    ///
    /// The image client writes into the same static tree the server serves,
    /// so its output directory follows `server.static_dir`.
    #[must_use]
    pub fn with_aligned_paths(mut self) -> Self {
        self.image.output_dir = std::path::PathBuf::from(&self.server.static_dir);
        self
    }
}
