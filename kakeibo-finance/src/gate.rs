//! Row validity gate. Rejected rows are dropped without error.

use kakeibo_core::{MERCHANT, Row, USAGE_DATE, is_usage_date};

/// Why a row was left out of classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingUsageDate,
    MalformedUsageDate,
    MissingMerchant,
}

/// Check a normalized row.
///
/// The usage amount never rejects a row: a missing or non-numeric amount is
/// cleaned to zero.
pub fn check(row: &Row) -> Result<(), Rejection> {
    match row.get(USAGE_DATE) {
        None | Some("") => return Err(Rejection::MissingUsageDate),
        Some(date) if !is_usage_date(date) => return Err(Rejection::MalformedUsageDate),
        Some(_) => {}
    }
    if row.get(MERCHANT).is_none_or(str::is_empty) {
        return Err(Rejection::MissingMerchant);
    }
    Ok(())
}

pub fn is_valid(row: &Row) -> bool {
    check(row).is_ok()
}
