//! Server host for transport-agnostic API exposure
//!
//! The host bundles the record store, the data source and the configuration.
//! Exposures (only REST today) read from it and never own state of their own.

use std::sync::Arc;

use crate::config::BoardConfig;
use crate::core::source::RecordSource;
use crate::core::store::{FetchOutcome, RecordStore};

pub struct ServerHost {
    pub config: Arc<BoardConfig>,

    /// Holds the full collection for the current fetch cycle
    pub store: Arc<RecordStore>,

    pub source: Arc<dyn RecordSource>,
}

impl ServerHost {
    pub fn new(config: BoardConfig, store: Arc<RecordStore>, source: Arc<dyn RecordSource>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            source,
        }
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Run one fetch cycle against the configured source
    pub async fn refresh(&self) -> FetchOutcome {
        self.store.refresh(self.source.as_ref()).await
    }
}
