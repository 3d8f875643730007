//! Display formatting for contract dates
//!
//! Output of these helpers is for humans only. Comparisons always run on
//! [`IsoDate`] values.

use crate::core::record::{ContractDate, IsoDate};

/// `2024-06-01` → `01/06/2024`
pub fn format_display_date(date: &IsoDate) -> String {
    date.to_naive().format("%d/%m/%Y").to_string()
}

/// Format a contract date, passing unparseable values through untouched
pub fn format_contract_date(date: &ContractDate) -> String {
    match date {
        ContractDate::Iso(date) => format_display_date(date),
        ContractDate::Unparsed(raw) => raw.clone(),
    }
}
