//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the classification model service (e.g. "http://model:9000").
    pub model_host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Upstream request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Connection pool size per host for the upstream client.
    #[serde(default = "default_http_pool_size")]
    pub http_pool_size: usize,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_http_timeout_ms() -> u64 {
    30_000
}

fn default_http_pool_size() -> usize {
    10
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        let config: Self = envy::from_env()?;
        Ok(config.normalized())
    }

    /// MODEL_HOST is stored trimmed; it is immutable after load.
    fn normalized(mut self) -> Self {
        self.model_host = self.model_host.trim().to_string();
        self
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.model_host.is_empty() {
            return Err("MODEL_HOST is required and must not be empty".to_string());
        }

        if !self.model_host.contains("://") {
            return Err(format!(
                "MODEL_HOST is missing protocol, like \"http://...\" (was: \"{}\")",
                self.model_host
            ));
        }

        Ok(())
    }
}
