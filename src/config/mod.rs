//! Configuration loading and management
//!
//! ```yaml
//! page_size: 10
//! bind: "127.0.0.1:3000"
//! source:
//!   kind: http
//!   url: "https://localhost:7258/api/Vehicles/GetAll"
//!   timeout_secs: 10
//!   accept_invalid_certs: true
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::error::ConfigError;
use crate::core::query::PAGE_SIZE;

/// Where vehicle records come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// GET a JSON array from an HTTP endpoint
    Http {
        url: String,

        /// Request timeout, 0 disables it
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,

        /// Accept self-signed certificates (local development servers)
        #[serde(default)]
        accept_invalid_certs: bool,
    },

    /// Read a JSON array from a file
    File { path: PathBuf },
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Http {
            url: "https://localhost:7258/api/Vehicles/GetAll".to_string(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Listen address for the REST exposure
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default)]
    pub source: SourceConfig,
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            bind: default_bind(),
            source: SourceConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                message: "page_size must be at least 1".to_string(),
            });
        }

        match &self.source {
            SourceConfig::Http { url, .. } if url.trim().is_empty() => Err(ConfigError::Invalid {
                message: "http source requires a url".to_string(),
            }),
            SourceConfig::File { path } if path.as_os_str().is_empty() => {
                Err(ConfigError::Invalid {
                    message: "file source requires a path".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
