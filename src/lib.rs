//! # rental-board
//!
//! Browse vehicle rental records by customer name and rental period, one
//! fixed-size page at a time.
//!
//! ## Features
//!
//! - **Filter-and-paginate engine**: pure functions from (records, criteria,
//!   page) to the visible page, total page count and navigation state
//! - **Browse sessions**: explicit filter/page state with a page-reset policy
//! - **Record store**: whole-collection snapshots, stale fetches discarded by
//!   generation
//! - **Sources**: HTTP endpoint, JSON file, or in-memory
//! - **REST exposure**: `GET /rentals` with filters and page in the query
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rental_board::prelude::*;
//!
//! let mut session = BrowseSession::with_collection(records, PAGE_SIZE);
//! session.set_name_query("smith");
//! session.set_start_date_floor(Some(IsoDate::parse("2024-06-01")?));
//!
//! for record in session.visible() {
//!     println!("{} {}", record.id, record.license_plate);
//! }
//! assert!(!session.navigation().previous_enabled);
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod sources;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::{BoardConfig, SourceConfig};

    pub use crate::core::{
        BoardError, BrowseSession, ConfigError, ContractDate, EventBus, EventEnvelope,
        FetchError, FetchOutcome, FetchTicket, FilterCriteria, IsoDate, Navigation, PAGE_SIZE,
        PageLink, PageSlice, PaginatedResponse, PaginationMeta, PaginationState, RecordSource,
        RecordStore, RentalContract, RentalQuery, StoreEvent, ValidationError, VehicleRecord,
        apply_filters, decode_records, format_contract_date, format_display_date, paginate,
        total_pages,
    };

    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    pub use crate::sources::{FileRecordSource, HttpRecordSource, InMemoryRecordSource};

    pub use anyhow::Result;
    pub use std::sync::Arc;
}
