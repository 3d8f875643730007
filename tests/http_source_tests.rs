//! Tests for HttpRecordSource against a local mock endpoint

mod common;

use axum::{Json, Router, http::StatusCode, routing::get};
use common::*;
use rental_board::prelude::*;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral port and return its base URL
async fn spawn_endpoint(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock endpoint");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock endpoint crashed");
    });

    format!("http://{}", addr)
}

fn wire_records() -> Value {
    json!([
        {
            "id": 2,
            "licensePlate": "EF-222-GH",
            "brand": "Skoda",
            "model": "Fabia",
            "rentalContractId": 20,
            "rentalContract": {
                "id": 20,
                "customerName": "SMITHERS Co",
                "startDate": "2024-06-01T00:00:00",
                "endDate": "2024-06-30T00:00:00"
            }
        },
        {
            "id": 1,
            "licensePlate": "AB-111-CD",
            "brand": "Opel",
            "model": "Corsa",
            "rentalContractId": 10,
            "rentalContract": {
                "id": 10,
                "customerName": "Jane Doe",
                "startDate": "2024-05-01T00:00:00",
                "endDate": "2024-05-10T00:00:00"
            }
        }
    ])
}

#[tokio::test]
async fn test_loads_records_in_source_order() {
    let base = spawn_endpoint(
        Router::new().route("/api/Vehicles/GetAll", get(|| async { Json(wire_records()) })),
    )
    .await;

    let source = HttpRecordSource::new(format!("{}/api/Vehicles/GetAll", base));
    let records = source.load().await.expect("load should succeed");

    assert_eq!(ids(&records), vec![2, 1]);
    assert_eq!(records[0].customer_name(), Some("SMITHERS Co"));
    assert_eq!(records[0].end_date().map(IsoDate::as_str), Some("2024-06-30"));
}

#[tokio::test]
async fn test_datetime_contract_dates_filter_by_calendar_day() {
    let base = spawn_endpoint(
        Router::new().route("/vehicles", get(|| async { Json(wire_records()) })),
    )
    .await;

    let records = HttpRecordSource::new(format!("{}/vehicles", base))
        .load()
        .await
        .expect("load should succeed");

    let criteria = FilterCriteria::new().with_end_date_ceiling(date("2024-06-30"));
    let kept: Vec<i64> = apply_filters(&records, &criteria).iter().map(|r| r.id).collect();
    assert_eq!(kept, vec![2, 1]);
}

#[tokio::test]
async fn test_server_error_is_status_error() {
    let base = spawn_endpoint(Router::new().route(
        "/vehicles",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;

    let err = HttpRecordSource::new(format!("{}/vehicles", base))
        .load()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_unexpected_payload_is_decode_error() {
    let base = spawn_endpoint(Router::new().route(
        "/vehicles",
        get(|| async { Json(json!({"items": []})) }),
    ))
    .await;

    let err = HttpRecordSource::new(format!("{}/vehicles", base))
        .load()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn test_store_falls_back_to_empty_on_failure() {
    let base = spawn_endpoint(Router::new().route(
        "/vehicles",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    ))
    .await;

    let store = RecordStore::new();
    let mut events = store.events().subscribe();
    let source = HttpRecordSource::new(format!("{}/vehicles", base));

    let outcome = store.refresh(&source).await;
    assert!(matches!(outcome, FetchOutcome::Failed { generation: 1, .. }));
    assert!(store.snapshot().is_empty());

    let envelope = events.recv().await.expect("event published");
    assert!(matches!(
        envelope.event,
        StoreEvent::LoadFailed { generation: 1, .. }
    ));
}
