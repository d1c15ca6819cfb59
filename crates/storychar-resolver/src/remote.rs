//! Remote character source over HTTP

use crate::source::{CharacterSource, SourceError, SourceResult};
use reqwest::Client;
use std::time::Duration;
use storychar_core::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use storychar_core::RawCharacter;
use tracing::{debug, error};

pub struct RemoteSource {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl RemoteSource {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CharacterSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch(&self) -> SourceResult<RawCharacter> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::TimedOut(self.timeout)
                } else {
                    SourceError::NetworkError(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("remote error {}: {}", status, error_text);
            return Err(SourceError::BadStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::TimedOut(self.timeout)
            } else {
                SourceError::NetworkError(e)
            }
        })?;

        serde_json::from_str(&body).map_err(|e| SourceError::InvalidResponse(e.to_string()))
    }
}
