//! Shared fixtures for integration tests

#![allow(dead_code)]

use rental_board::prelude::*;

pub fn record(id: i64, customer: &str, start: &str, end: &str) -> VehicleRecord {
    VehicleRecord::new(
        id,
        format!("AB-{id:03}-CD"),
        "Renault",
        "Clio",
        RentalContract::new(100 + id, customer, start, end),
    )
}

/// `n` records with distinct ids, all rented in June 2024
pub fn fleet(n: i64) -> Vec<VehicleRecord> {
    (1..=n)
        .map(|id| record(id, &format!("Customer {id}"), "2024-06-01", "2024-06-10"))
        .collect()
}

/// A deterministic, varied collection for property-style checks
pub fn mixed_fleet(n: i64) -> Vec<VehicleRecord> {
    let names = ["John Smith", "Jane Doe", "SMITHERS Co", "Ali Ben", "smith & sons"];
    (1..=n)
        .map(|id| {
            let month = (id % 12) + 1;
            let day = (id * 7) % 28 + 1;
            let start = format!("2024-{month:02}-{day:02}");
            let end = format!("2024-{month:02}-{:02}", (day + 3).min(28));
            record(id, names[(id as usize) % names.len()], &start, &end)
        })
        .collect()
}

pub fn date(s: &str) -> IsoDate {
    IsoDate::parse(s).expect("valid test date")
}

pub fn ids(records: &[VehicleRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}
