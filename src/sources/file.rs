//! File-backed record source for fixtures and offline demos

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::core::error::FetchError;
use crate::core::record::VehicleRecord;
use crate::core::source::{RecordSource, decode_records};

#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn load(&self) -> Result<Vec<VehicleRecord>, FetchError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FetchError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        decode_records(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
