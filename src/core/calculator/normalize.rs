use crate::errors::{AppError, AppResult};
use crate::utils::date::today_in;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Project a raw date/datetime input onto the organizational offset and
/// truncate it to a calendar date.
///
/// - RFC 3339 input carries its own offset → converted first.
/// - Naive input (date or datetime) → treated as already local.
/// - None → today in the organizational offset.
pub fn normalize_date(input: Option<&str>, offset: FixedOffset) -> AppResult<NaiveDate> {
    let Some(raw) = input else {
        return Ok(today_in(offset));
    };
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&offset).date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(dt.date());
    }

    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d);
    }

    Err(AppError::InvalidDate(raw.to_string()))
}
