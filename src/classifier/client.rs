//! HTTP client for the classification model service.

use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::error::ClassifyError;

use super::types::Sms;

/// Client for the externally hosted classification model.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL of the model service.
    model_host: String,
}

impl ClassifierClient {
    /// Create a new classifier client from config with pooled HTTP settings.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            // Fast connection establishment
            .connect_timeout(std::time::Duration::from_millis(500))
            // TCP_NODELAY for low-latency (disable Nagle's algorithm)
            .tcp_nodelay(true)
            // Keep connections alive for reuse
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .pool_max_idle_per_host(config.http_pool_size)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            model_host: config.model_host.clone(),
        }
    }

    /// Get the model host base URL.
    pub fn model_host(&self) -> &str {
        &self.model_host
    }

    /// Ask the model service to classify one SMS.
    ///
    /// Returns the predicted label, trimmed of surrounding whitespace. No
    /// retries; a slow upstream blocks for the full client timeout.
    #[instrument(skip(self, sms), fields(text = %sms.sms))]
    pub async fn predict(&self, sms: &Sms) -> Result<String, ClassifyError> {
        let url = Url::parse(&format!("{}/predict", self.model_host)).map_err(|source| {
            ClassifyError::InvalidUrl {
                host: self.model_host.clone(),
                source,
            }
        })?;

        debug!(%url, "posting sms to model service");

        let response = self.http.post(url).json(sms).send().await?;

        if !response.status().is_success() {
            return Err(ClassifyError::UpstreamStatus {
                status: response.status(),
            });
        }

        let reply: Sms = response.json().await?;
        let label = reply.result.ok_or(ClassifyError::MissingResult)?;

        Ok(label.trim().to_string())
    }
}
