use chrono::{Datelike, FixedOffset, NaiveDate, Utc};

/// Today's calendar date in the organizational offset.
pub fn today_in(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Expand a period expression into inclusive date bounds.
///
/// Accepted forms:
/// - YYYY-MM-DD → that single day
/// - YYYY-MM    → whole month
/// - YYYY       → whole year
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// Expand a period or a `start:end` range into inclusive date bounds.
pub fn range_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((a, b)) = p.split_once(':') {
        let (start, _) = period_bounds(a)?;
        let (_, end) = period_bounds(b)?;
        if end < start {
            return Err(format!("Invalid range: {}", p));
        }
        return Ok((start, end));
    }
    period_bounds(p)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    while let Some(next) = d.succ_opt() {
        if next.month() != month {
            break;
        }
        d = next;
    }
    d
}
