//! HTTP record source
//!
//! Issues a single GET and expects a JSON array of vehicle records. No
//! query parameters are sent: filtering and pagination are client-side.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::SourceConfig;
use crate::core::error::{ConfigError, FetchError};
use crate::core::record::VehicleRecord;
use crate::core::source::{RecordSource, decode_records};

#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    url: String,
}

impl HttpRecordSource {
    /// Source with a default client
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_settings(
        url: &str,
        timeout_secs: u64,
        accept_invalid_certs: bool,
    ) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().danger_accept_invalid_certs(accept_invalid_certs);
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build().map_err(|e| ConfigError::Source {
            message: e.to_string(),
        })?;
        Ok(Self::with_client(client, url))
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, ConfigError> {
        match config {
            SourceConfig::Http {
                url,
                timeout_secs,
                accept_invalid_certs,
            } => Self::from_settings(url, *timeout_secs, *accept_invalid_certs),
            other => Err(ConfigError::Source {
                message: format!("not an http source: {:?}", other),
            }),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport(&self, err: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.clone(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn load(&self) -> Result<Vec<VehicleRecord>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport(e))?;
        decode_records(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
