//! Filter criteria and predicate composition
//!
//! Three independent predicates, combined with AND:
//!
//! 1. customer name contains the query, ignoring case
//! 2. contract start date on or after the floor
//! 3. contract end date on or before the ceiling
//!
//! An absent criterion always matches. The predicates commute, so the order
//! they run in only affects how early a record is rejected.

use crate::core::error::ValidationError;
use crate::core::record::{IsoDate, VehicleRecord};

/// User-supplied filter values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Empty means no name filtering
    pub name_query: String,

    /// Keep contracts starting on or after this date
    pub start_date_floor: Option<IsoDate>,

    /// Keep contracts ending on or before this date
    pub end_date_ceiling: Option<IsoDate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = query.into();
        self
    }

    pub fn with_start_date_floor(mut self, floor: IsoDate) -> Self {
        self.start_date_floor = Some(floor);
        self
    }

    pub fn with_end_date_ceiling(mut self, ceiling: IsoDate) -> Self {
        self.end_date_ceiling = Some(ceiling);
        self
    }

    /// Build criteria from raw form inputs
    ///
    /// Empty date inputs mean "no bound", the way an untouched date picker
    /// reports itself. Non-empty inputs must be canonical `YYYY-MM-DD`.
    pub fn from_inputs(
        name_query: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name_query: name_query.to_string(),
            start_date_floor: parse_date_input("startDate", start_date)?,
            end_date_ceiling: parse_date_input("endDate", end_date)?,
        })
    }

    /// True when no criterion is active
    pub fn is_unfiltered(&self) -> bool {
        self.name_query.is_empty()
            && self.start_date_floor.is_none()
            && self.end_date_ceiling.is_none()
    }
}

fn parse_date_input(field: &str, value: &str) -> Result<Option<IsoDate>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    IsoDate::parse(value)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDateParam {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Criteria prepared for repeated evaluation (lowercased needle)
struct Predicates<'c> {
    needle: Option<String>,
    floor: Option<&'c IsoDate>,
    ceiling: Option<&'c IsoDate>,
}

impl<'c> Predicates<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            needle: (!criteria.name_query.is_empty()).then(|| criteria.name_query.to_lowercase()),
            floor: criteria.start_date_floor.as_ref(),
            ceiling: criteria.end_date_ceiling.as_ref(),
        }
    }

    fn matches(&self, record: &VehicleRecord) -> bool {
        self.matches_name(record) && self.matches_floor(record) && self.matches_ceiling(record)
    }

    fn matches_name(&self, record: &VehicleRecord) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        record
            .customer_name()
            .is_some_and(|name| name.to_lowercase().contains(needle.as_str()))
    }

    fn matches_floor(&self, record: &VehicleRecord) -> bool {
        let Some(floor) = self.floor else {
            return true;
        };
        record.start_date().is_some_and(|start| start >= floor)
    }

    fn matches_ceiling(&self, record: &VehicleRecord) -> bool {
        let Some(ceiling) = self.ceiling else {
            return true;
        };
        record.end_date().is_some_and(|end| end <= ceiling)
    }
}

/// Keep the records matching every active criterion
///
/// The result borrows from `collection` and keeps its relative order.
pub fn apply_filters<'a>(
    collection: &'a [VehicleRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a VehicleRecord> {
    if criteria.is_unfiltered() {
        return collection.iter().collect();
    }

    let predicates = Predicates::new(criteria);
    collection
        .iter()
        .filter(|record| predicates.matches(record))
        .collect()
}
