//! In-memory record source for testing and development

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::core::error::FetchError;
use crate::core::record::VehicleRecord;
use crate::core::source::RecordSource;

/// In-memory record source
///
/// Serves a fixed response which can be swapped at runtime. Clones share
/// the same response.
#[derive(Clone)]
pub struct InMemoryRecordSource {
    response: Arc<RwLock<Result<Vec<VehicleRecord>, FetchError>>>,
}

impl InMemoryRecordSource {
    pub fn new(records: Vec<VehicleRecord>) -> Self {
        Self {
            response: Arc::new(RwLock::new(Ok(records))),
        }
    }

    /// A source whose every load fails with `error`
    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Arc::new(RwLock::new(Err(error))),
        }
    }

    pub fn set_records(&self, records: Vec<VehicleRecord>) -> Result<(), FetchError> {
        self.replace(Ok(records))
    }

    pub fn set_failure(&self, error: FetchError) -> Result<(), FetchError> {
        self.replace(Err(error))
    }

    fn replace(&self, response: Result<Vec<VehicleRecord>, FetchError>) -> Result<(), FetchError> {
        let mut guard = self.response.write().map_err(|e| FetchError::Unavailable {
            message: format!("Failed to acquire write lock: {}", e),
        })?;
        *guard = response;
        Ok(())
    }
}

impl Default for InMemoryRecordSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn load(&self) -> Result<Vec<VehicleRecord>, FetchError> {
        let guard = self.response.read().map_err(|e| FetchError::Unavailable {
            message: format!("Failed to acquire read lock: {}", e),
        })?;
        guard.clone()
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
