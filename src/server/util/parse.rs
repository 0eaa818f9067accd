use chrono::NaiveDate;

use crate::server::error::{internal::InternalError, AppError};

/// Date format accepted for advent dates in paths and bodies.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a u64 value from a stored String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a `YYYY-MM-DD` date string.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed calendar date
/// - `Err(AppError::DateParseErr)` - String is not a valid `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
}
