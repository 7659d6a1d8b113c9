use chrono::{DateTime, NaiveDate};
use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a record identifier from a path segment.
///
/// # Arguments
/// - `value` - The raw identifier as received from the client
///
/// # Returns
/// - `Ok(Uuid)` - The identifier is syntactically valid
/// - `Err(AppError::InvalidId)` - The value is not a UUID; no lookup should be attempted
pub fn parse_record_id(value: &str) -> Result<Uuid, AppError> {
    Uuid::try_parse(value).map_err(|_| AppError::InvalidId(value.to_string()))
}

/// Extracts a required text field, trimmed.
///
/// # Returns
/// - `Ok(String)` - The trimmed, non-empty value
/// - `Err(AppError::Validation)` - The field is absent or blank
pub fn required_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::Validation(format!("Field '{}' is required", field))),
    }
}

/// Extracts an optional text field, mapping blank values to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Extracts a required reference to a record held by another store.
///
/// Only the identifier syntax is checked; whether the record exists is not.
pub fn required_reference(field: &str, value: Option<String>) -> Result<Uuid, AppError> {
    let raw = required_text(field, value)?;

    Uuid::try_parse(&raw)
        .map_err(|_| AppError::Validation(format!("Field '{}' is not a valid ID: '{}'", field, raw)))
}

/// Extracts a required calendar date.
///
/// Accepts `YYYY-MM-DD` and, for clients that send full timestamps, RFC 3339 date-times whose
/// date part is kept.
pub fn required_date(field: &str, value: Option<String>) -> Result<NaiveDate, AppError> {
    let raw = required_text(field, value)?;

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(&raw).map(|dt| dt.date_naive()))
        .map_err(|_| {
            AppError::Validation(format!(
                "Field '{}' is not a valid date (expected YYYY-MM-DD): '{}'",
                field, raw
            ))
        })
}
