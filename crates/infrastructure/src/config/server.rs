//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Public base URL used in returned links (no trailing slash)
    #[serde(default = "default_public_url")]
    pub public_url: String,

    /// Directory served under /static and holding generated portraits
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Allowed CORS origins (empty = allow all in dev)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,

    /// Maximum body size for audio uploads in bytes (default: 10MB)
    #[serde(default = "default_max_body_audio")]
    pub max_body_size_audio_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_public_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

const fn default_max_body_audio() -> usize {
    10 * 1024 * 1024 // 10MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_url: default_public_url(),
            static_dir: default_static_dir(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: Some(30),
            max_body_size_audio_bytes: default_max_body_audio(),
        }
    }
}

impl ServerConfig {
    /// Public URL of a path under the static tree
    #[must_use]
    pub fn static_url(&self, relative: &str) -> String {
        format!(
            "{}/static/{}",
            self.public_url.trim_end_matches('/'),
            relative
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.public_url, "http://localhost:8080");
        assert_eq!(config.static_dir, "static");
        assert!(config.allowed_origins.is_empty());
        assert_eq!(config.shutdown_timeout_secs, Some(30));
        assert_eq!(config.max_body_size_audio_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn static_url_joins_public_url_and_path() {
        let config = ServerConfig::default();
        assert_eq!(
            config.static_url("characters/Aiko/image.png"),
            "http://localhost:8080/static/characters/Aiko/image.png"
        );
    }

    #[test]
    fn static_url_tolerates_trailing_slash() {
        let config = ServerConfig {
            public_url: "https://koetomo.example/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.static_url("characters/Aiko/image.png"),
            "https://koetomo.example/static/characters/Aiko/image.png"
        );
    }
}
