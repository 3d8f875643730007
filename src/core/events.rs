//! Store events for hosts that re-render on data changes
//!
//! Every completed fetch produces exactly one event. A host holding a
//! [`BrowseSession`](crate::core::session::BrowseSession) subscribes and
//! calls `replace_collection` with the new snapshot when it sees
//! [`StoreEvent::Loaded`] or [`StoreEvent::LoadFailed`].
//!
//! ```rust,ignore
//! let mut rx = store.events().subscribe();
//! tokio::spawn(async move {
//!     while let Ok(envelope) = rx.recv().await {
//!         if envelope.event.replaced_collection() {
//!             session.replace_collection(store.snapshot());
//!         }
//!     }
//! });
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A fetch succeeded and its records are now the collection
    Loaded { generation: u64, count: usize },

    /// A fetch failed and the collection is now empty
    LoadFailed { generation: u64, message: String },

    /// A fetch completed after a newer one was started; ignored
    Discarded { generation: u64 },
}

impl StoreEvent {
    pub fn generation(&self) -> u64 {
        match self {
            StoreEvent::Loaded { generation, .. }
            | StoreEvent::LoadFailed { generation, .. }
            | StoreEvent::Discarded { generation } => *generation,
        }
    }

    /// Whether the store's collection changed
    pub fn replaced_collection(&self) -> bool {
        !matches!(self, StoreEvent::Discarded { .. })
    }
}

/// Envelope wrapping a store event with its timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub timestamp: DateTime<Utc>,
    pub event: StoreEvent,
}

impl EventEnvelope {
    pub fn new(event: StoreEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone; all clones share the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// Slow receivers lose the oldest events (lagged) once `capacity` events
    /// are buffered.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of receivers that will see it.
    pub fn publish(&self, event: StoreEvent) -> usize {
        // send() returns Err only if there are no receivers, which is fine
        self.sender.send(EventEnvelope::new(event)).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
