//! Record source implementations

pub mod file;
pub mod http;
pub mod in_memory;

pub use file::FileRecordSource;
pub use http::HttpRecordSource;
pub use in_memory::InMemoryRecordSource;

use std::sync::Arc;

use crate::config::SourceConfig;
use crate::core::error::ConfigError;
use crate::core::source::RecordSource;

/// Build the source described by `config`
pub fn from_config(config: &SourceConfig) -> Result<Arc<dyn RecordSource>, ConfigError> {
    match config {
        SourceConfig::Http { .. } => Ok(Arc::new(HttpRecordSource::from_config(config)?)),
        SourceConfig::File { path } => Ok(Arc::new(FileRecordSource::new(path.clone()))),
    }
}
