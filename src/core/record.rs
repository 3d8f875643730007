//! Vehicle rental records as delivered by the data source
//!
//! Records arrive as a JSON array of vehicles, each embedding the rental
//! contract it is currently attached to:
//!
//! ```json
//! {
//!   "id": 1,
//!   "licensePlate": "AB-123-CD",
//!   "brand": "Renault",
//!   "model": "Clio",
//!   "rentalContractId": 7,
//!   "rentalContract": {
//!     "id": 7,
//!     "customerName": "John Smith",
//!     "startDate": "2024-06-01",
//!     "endDate": "2024-06-15"
//!   }
//! }
//! ```
//!
//! Contract dates are compared as strings. That is only sound because
//! [`IsoDate`] admits nothing but canonical, zero-padded `YYYY-MM-DD`
//! values, for which byte order and calendar order coincide.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ValidationError;

/// A calendar date in canonical ISO-8601 form (`YYYY-MM-DD`)
///
/// The derived `Ord` compares the underlying strings. Construction rejects
/// anything that is not exactly ten characters of zero-padded year, month
/// and day, so the string order is the chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoDate(String);

impl IsoDate {
    /// Parse a strict `YYYY-MM-DD` string
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate {
            value: input.to_string(),
        };

        let bytes = input.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shaped {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())?;
        Ok(Self(input.to_string()))
    }

    /// Parse a contract date, accepting a trailing time component
    ///
    /// Data sources backed by a `DateTime` column serialize dates as
    /// `2024-06-01T00:00:00`. Only the calendar-date prefix takes part in
    /// comparisons.
    pub fn parse_lenient(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let date_part = match trimmed.as_bytes().get(10) {
            Some(b'T') | Some(b't') | Some(b' ') => &trimmed[..10],
            _ => trimmed,
        };
        Self::parse(date_part).map_err(|_| ValidationError::InvalidDate {
            value: input.to_string(),
        })
    }

    pub fn from_naive(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::parse(&date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_naive(&self) -> NaiveDate {
        // Validated on construction.
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").unwrap_or_default()
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IsoDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IsoDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IsoDate> for String {
    fn from(date: IsoDate) -> Self {
        date.0
    }
}

/// A contract date as received from the source
///
/// Unparseable values are kept verbatim instead of failing the whole
/// payload. They never satisfy a date criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContractDate {
    Iso(IsoDate),
    Unparsed(String),
}

impl ContractDate {
    pub fn as_iso(&self) -> Option<&IsoDate> {
        match self {
            ContractDate::Iso(date) => Some(date),
            ContractDate::Unparsed(_) => None,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            ContractDate::Iso(date) => date.as_str(),
            ContractDate::Unparsed(raw) => raw,
        }
    }
}

impl Default for ContractDate {
    fn default() -> Self {
        ContractDate::Unparsed(String::new())
    }
}

impl From<String> for ContractDate {
    fn from(raw: String) -> Self {
        match IsoDate::parse_lenient(&raw) {
            Ok(date) => ContractDate::Iso(date),
            Err(_) => ContractDate::Unparsed(raw),
        }
    }
}

impl From<&str> for ContractDate {
    fn from(raw: &str) -> Self {
        ContractDate::from(raw.to_string())
    }
}

impl From<IsoDate> for ContractDate {
    fn from(date: IsoDate) -> Self {
        ContractDate::Iso(date)
    }
}

impl From<ContractDate> for String {
    fn from(date: ContractDate) -> Self {
        match date {
            ContractDate::Iso(date) => date.into(),
            ContractDate::Unparsed(raw) => raw,
        }
    }
}

/// Read an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Rental contract embedded in a vehicle record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalContract {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: ContractDate,

    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: ContractDate,
}

impl RentalContract {
    pub fn new(
        id: i64,
        customer_name: impl Into<String>,
        start_date: impl Into<ContractDate>,
        end_date: impl Into<ContractDate>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

/// A vehicle together with its rental contract
///
/// `rental_contract` is optional on the wire. A record without one is still
/// listed while no criterion needs contract data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub license_plate: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_contract_id: Option<i64>,

    #[serde(default)]
    pub rental_contract: Option<RentalContract>,
}

impl VehicleRecord {
    pub fn new(
        id: i64,
        license_plate: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        rental_contract: RentalContract,
    ) -> Self {
        Self {
            id,
            license_plate: license_plate.into(),
            brand: brand.into(),
            model: model.into(),
            rental_contract_id: Some(rental_contract.id),
            rental_contract: Some(rental_contract),
        }
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.rental_contract
            .as_ref()
            .map(|contract| contract.customer_name.as_str())
    }

    pub fn start_date(&self) -> Option<&IsoDate> {
        self.rental_contract
            .as_ref()
            .and_then(|contract| contract.start_date.as_iso())
    }

    pub fn end_date(&self) -> Option<&IsoDate> {
        self.rental_contract
            .as_ref()
            .and_then(|contract| contract.end_date.as_iso())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_iso_date_accepts_canonical_form() {
        let date = IsoDate::parse("2024-06-01").unwrap();
        assert_eq!(date.as_str(), "2024-06-01");
        assert_eq!(date.to_naive(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_iso_date_rejects_non_canonical_forms() {
        for input in [
            "2024-6-1",
            "2024/06/01",
            "01/06/2024",
            "2024-13-01",
            "2024-02-30",
            "+2024-06-01",
            "",
            "2024-06-01T00:00:00",
        ] {
            assert!(IsoDate::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_lenient_parse_drops_time_component() {
        let date = IsoDate::parse_lenient("2024-06-30T00:00:00").unwrap();
        assert_eq!(date.as_str(), "2024-06-30");

        let date = IsoDate::parse_lenient(" 2024-06-30 12:15:00").unwrap();
        assert_eq!(date.as_str(), "2024-06-30");

        assert!(IsoDate::parse_lenient("June 30th").is_err());
    }

    #[test]
    fn test_string_order_matches_calendar_order() {
        let start = NaiveDate::from_ymd_opt(1999, 12, 25).unwrap();
        let dates: Vec<NaiveDate> = (0..800).map(|i| start + Duration::days(i * 3)).collect();

        for pair in dates.windows(2) {
            let a = IsoDate::from_naive(pair[0]).unwrap();
            let b = IsoDate::from_naive(pair[1]).unwrap();
            assert_eq!(a.cmp(&b), pair[0].cmp(&pair[1]));
            assert_eq!(a.as_str().cmp(b.as_str()), pair[0].cmp(&pair[1]));
        }
    }

    #[test]
    fn test_record_deserializes_wire_format() {
        let json = r#"{
            "id": 3,
            "licensePlate": "AB-123-CD",
            "brand": "Renault",
            "model": "Clio",
            "rentalContractId": 9,
            "rentalContract": {
                "id": 9,
                "customerName": "John Smith",
                "startDate": "2024-06-01T00:00:00",
                "endDate": "2024-06-15"
            }
        }"#;

        let record: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.rental_contract_id, Some(9));
        assert_eq!(record.customer_name(), Some("John Smith"));
        assert_eq!(record.start_date().map(IsoDate::as_str), Some("2024-06-01"));
        assert_eq!(record.end_date().map(IsoDate::as_str), Some("2024-06-15"));
    }

    #[test]
    fn test_record_tolerates_missing_contract_and_bad_dates() {
        let json = r#"[
            {"id": 1, "licensePlate": "X", "brand": "B", "model": "M"},
            {"id": 2, "licensePlate": "Y", "brand": "B", "model": "M",
             "rentalContract": null},
            {"id": 3, "licensePlate": "Z", "brand": "B", "model": "M",
             "rentalContract": {"id": 4, "customerName": "Ann",
                                "startDate": "soon", "endDate": "2024-01-01"}}
        ]"#;

        let records: Vec<VehicleRecord> = serde_json::from_str(json).unwrap();
        assert!(records[0].rental_contract.is_none());
        assert!(records[1].rental_contract.is_none());
        assert_eq!(records[2].start_date(), None);
        assert_eq!(
            records[2].rental_contract.as_ref().unwrap().start_date.raw(),
            "soon"
        );
    }

    #[test]
    fn test_null_fields_do_not_reject_the_payload() {
        let json = br#"[
            {"id": 1, "licensePlate": "AA-1", "brand": "Opel", "model": "Corsa",
             "rentalContract": {"id": 10, "customerName": "John Smith",
                                "startDate": "2024-06-01", "endDate": "2024-06-15"}},
            {"id": 2, "licensePlate": null, "brand": "Opel", "model": null,
             "rentalContractId": null,
             "rentalContract": {"id": null, "customerName": null,
                                "startDate": "2024-06-01", "endDate": null}},
            {"id": 3, "licensePlate": "CC-3", "brand": "Kia", "model": "Rio",
             "rentalContract": {"customerName": "Jane Doe",
                                "startDate": "2024-06-02", "endDate": "2024-06-20"}}
        ]"#;

        let records = crate::core::source::decode_records(json).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let partial = &records[1];
        assert_eq!(partial.license_plate, "");
        assert_eq!(partial.model, "");
        assert_eq!(partial.rental_contract_id, None);
        assert_eq!(partial.customer_name(), Some(""));
        assert_eq!(partial.start_date().map(IsoDate::as_str), Some("2024-06-01"));
        assert_eq!(partial.end_date(), None);

        let contract = partial.rental_contract.as_ref().unwrap();
        assert_eq!(contract.id, 0);
        assert_eq!(contract.end_date, ContractDate::default());
        assert_eq!(records[2].rental_contract.as_ref().unwrap().id, 0);
    }
}
