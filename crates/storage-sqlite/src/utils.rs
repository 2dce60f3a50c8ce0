//! Column conversions shared by the repositories.
//!
//! Decimals are stored as TEXT to keep exact precision and dates as
//! `YYYY-MM-DD` TEXT.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads a stored decimal. Unparseable text is logged and read as `None`.
pub fn decimal_from_db(value: Option<String>, field_name: &str) -> Option<Decimal> {
    let raw = value?;
    match Decimal::from_str(&raw).or_else(|_| Decimal::from_scientific(&raw)) {
        Ok(d) => Some(d),
        Err(e) => {
            log::error!("Failed to parse stored {} '{}': {}", field_name, raw, e);
            None
        }
    }
}

pub fn decimal_to_db(value: Option<Decimal>) -> Option<String> {
    value.map(|d| d.to_string())
}

pub fn date_from_db(value: Option<String>, field_name: &str) -> Option<NaiveDate> {
    let raw = value?;
    match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
        Ok(d) => Some(d),
        Err(e) => {
            log::error!("Failed to parse stored {} '{}': {}", field_name, raw, e);
            None
        }
    }
}

pub fn date_to_db(value: Option<NaiveDate>) -> Option<String> {
    value.map(|d| d.format(DATE_FORMAT).to_string())
}
