//! HTTP handlers for the rental listing

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::core::error::BoardError;
use crate::core::filter::apply_filters;
use crate::core::format::format_contract_date;
use crate::core::query::{Navigation, PaginatedResponse, PaginationMeta, RentalQuery, paginate};
use crate::core::record::VehicleRecord;
use crate::core::store::FetchOutcome;
use crate::server::host::ServerHost;

/// One table row, dates formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalRow {
    pub id: i64,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub customer_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl From<&VehicleRecord> for RentalRow {
    fn from(record: &VehicleRecord) -> Self {
        let contract = record.rental_contract.as_ref();
        Self {
            id: record.id,
            license_plate: record.license_plate.clone(),
            brand: record.brand.clone(),
            model: record.model.clone(),
            customer_name: contract.map(|c| c.customer_name.clone()),
            start_date: contract.map(|c| format_contract_date(&c.start_date)),
            end_date: contract.map(|c| format_contract_date(&c.end_date)),
        }
    }
}

/// `GET /rentals`
///
/// Page 0 and malformed dates are rejected with 400. A page past the end
/// is answered with an empty page.
pub async fn list_rentals(
    State(host): State<Arc<ServerHost>>,
    Query(query): Query<RentalQuery>,
) -> Result<Json<PaginatedResponse<RentalRow>>, BoardError> {
    let page = query.page()?;
    let criteria = query.criteria()?;
    let page_size = host.page_size();

    let collection = host.store.snapshot();
    let filtered = apply_filters(&collection, &criteria);
    let slice = paginate(&filtered, page, page_size);

    tracing::debug!(
        page,
        total = filtered.len(),
        total_pages = slice.total_pages,
        "listing rentals"
    );

    Ok(Json(PaginatedResponse {
        data: slice.items.iter().map(|record| RentalRow::from(*record)).collect(),
        pagination: PaginationMeta::new(page, page_size, filtered.len()),
        navigation: Navigation::new(page, slice.total_pages),
    }))
}

/// `POST /rentals/refresh`
pub async fn refresh_rentals(State(host): State<Arc<ServerHost>>) -> Result<Json<Value>, BoardError> {
    match host.refresh().await {
        FetchOutcome::Loaded { generation, count } => Ok(Json(json!({
            "status": "loaded",
            "generation": generation,
            "count": count
        }))),
        FetchOutcome::Discarded { generation } => Ok(Json(json!({
            "status": "discarded",
            "generation": generation,
            "count": host.store.snapshot().len()
        }))),
        FetchOutcome::Failed { error, .. } => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::RentalContract;

    #[test]
    fn test_row_formats_dates() {
        let record = VehicleRecord::new(
            4,
            "GH-456-IJ",
            "Toyota",
            "Yaris",
            RentalContract::new(8, "Eve", "2024-06-01", "2024-06-15T00:00:00"),
        );

        let row = RentalRow::from(&record);
        assert_eq!(row.customer_name.as_deref(), Some("Eve"));
        assert_eq!(row.start_date.as_deref(), Some("01/06/2024"));
        assert_eq!(row.end_date.as_deref(), Some("15/06/2024"));
    }

    #[test]
    fn test_row_without_contract() {
        let mut record = VehicleRecord::new(
            5,
            "KL-789-MN",
            "Seat",
            "Ibiza",
            RentalContract::new(9, "Fay", "2024-06-01", "2024-06-02"),
        );
        record.rental_contract = None;

        let row = RentalRow::from(&record);
        assert_eq!(row.customer_name, None);
        assert_eq!(row.start_date, None);
    }
}
