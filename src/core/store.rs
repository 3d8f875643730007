//! Record store with fetch generations
//!
//! The store owns the full, unfiltered collection. It is replaced as a whole
//! when a fetch completes and is never mutated in place; readers get cheap
//! `Arc` snapshots.
//!
//! Each fetch is tagged with a generation from [`RecordStore::begin_fetch`].
//! When two fetches overlap, only the newest one may install its result. An
//! older response arriving late is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, error, info, warn};

use crate::core::error::FetchError;
use crate::core::events::{EventBus, StoreEvent};
use crate::core::record::VehicleRecord;
use crate::core::source::RecordSource;

/// Proof that a fetch was started, carrying its generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { generation: u64, count: usize },
    Failed { generation: u64, error: FetchError },
    Discarded { generation: u64 },
}

#[derive(Debug)]
struct Installed {
    generation: u64,
    records: Arc<[VehicleRecord]>,
}

#[derive(Debug)]
pub struct RecordStore {
    installed: RwLock<Installed>,
    issued: AtomicU64,
    events: EventBus,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            installed: RwLock::new(Installed {
                generation: 0,
                records: Arc::from(Vec::new()),
            }),
            issued: AtomicU64::new(0),
            events: EventBus::default(),
        }
    }

    /// Current collection
    pub fn snapshot(&self) -> Arc<[VehicleRecord]> {
        self.installed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .clone()
    }

    /// Generation of the installed collection, 0 before any fetch completed
    pub fn generation(&self) -> u64 {
        self.installed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Start a fetch cycle
    pub fn begin_fetch(&self) -> FetchTicket {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, "fetch started");
        FetchTicket { generation }
    }

    /// Finish a fetch cycle
    ///
    /// The result is installed only if no newer fetch has been started. A
    /// failure installs an empty collection.
    pub fn complete(
        &self,
        ticket: FetchTicket,
        result: Result<Vec<VehicleRecord>, FetchError>,
    ) -> FetchOutcome {
        let generation = ticket.generation;
        let mut installed = self
            .installed
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let newest = self.issued.load(Ordering::SeqCst);
        if generation != newest || generation <= installed.generation {
            warn!(generation, newest, "discarding stale fetch result");
            drop(installed);
            self.events.publish(StoreEvent::Discarded { generation });
            return FetchOutcome::Discarded { generation };
        }

        installed.generation = generation;
        let (outcome, event) = match result {
            Ok(records) => {
                let count = records.len();
                installed.records = Arc::from(records);
                info!(generation, count, "vehicle records loaded");
                (
                    FetchOutcome::Loaded { generation, count },
                    StoreEvent::Loaded { generation, count },
                )
            }
            Err(err) => {
                installed.records = Arc::from(Vec::new());
                error!(generation, error = %err, "error fetching vehicle records");
                let message = err.to_string();
                (
                    FetchOutcome::Failed {
                        generation,
                        error: err,
                    },
                    StoreEvent::LoadFailed {
                        generation,
                        message,
                    },
                )
            }
        };
        drop(installed);

        self.events.publish(event);
        outcome
    }

    /// Run a whole fetch cycle against `source`
    pub async fn refresh(&self, source: &dyn RecordSource) -> FetchOutcome {
        let ticket = self.begin_fetch();
        debug!(generation = ticket.generation, source = %source.describe(), "loading records");
        let result = source.load().await;
        self.complete(ticket, result)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
