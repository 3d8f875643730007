//! Data source trait
//!
//! A source delivers the full record list in one call. It never filters,
//! sorts or paginates; that all happens in the engine.

use async_trait::async_trait;

use crate::core::error::FetchError;
use crate::core::record::VehicleRecord;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every record, in source order
    async fn load(&self) -> Result<Vec<VehicleRecord>, FetchError>;

    /// Short description for logs (URL, file path...)
    fn describe(&self) -> String;
}

/// Decode a JSON array of vehicle records
pub fn decode_records(body: &[u8]) -> Result<Vec<VehicleRecord>, FetchError> {
    serde_json::from_slice(body).map_err(FetchError::decode)
}
