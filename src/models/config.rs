//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::transport::http::DEFAULT_SEARCH_API_URL;

fn default_search_api_url() -> String {
    DEFAULT_SEARCH_API_URL.to_string()
}

fn default_max_sessions() -> usize {
    1024
}

#[derive(Clone, Debug, Deserialize)]
/// Server settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Session cookie signing key; at least 64 bytes.
    pub secret: String,
    #[serde(default = "default_search_api_url")]
    pub search_api_url: String,
    /// Upper bound on concurrently tracked browser sessions.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}
