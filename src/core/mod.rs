//! Core module: record model, filter-and-paginate engine, record store

pub mod error;
pub mod events;
pub mod filter;
pub mod format;
pub mod query;
pub mod record;
pub mod session;
pub mod source;
pub mod store;

pub use error::{BoardError, ConfigError, FetchError, ValidationError};
pub use events::{EventBus, EventEnvelope, StoreEvent};
pub use filter::{FilterCriteria, apply_filters};
pub use format::{format_contract_date, format_display_date};
pub use query::{
    Navigation, PAGE_SIZE, PageLink, PageSlice, PaginatedResponse, PaginationMeta,
    PaginationState, RentalQuery, paginate, total_pages,
};
pub use record::{ContractDate, IsoDate, RentalContract, VehicleRecord};
pub use session::BrowseSession;
pub use source::{RecordSource, decode_records};
pub use store::{FetchOutcome, FetchTicket, RecordStore};
