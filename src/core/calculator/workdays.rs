use crate::errors::{AppError, AppResult};
use crate::models::half_day::HalfDay;
use chrono::{Datelike, NaiveDate, Weekday};

/// Weight of a calendar date towards a leave charge.
/// Saturday/Sunday weigh 0; this is the only weekend exclusion mechanism.
pub fn day_weight(day: NaiveDate) -> f64 {
    match day.weekday() {
        Weekday::Sat | Weekday::Sun => 0.0,
        _ => 1.0,
    }
}

/// Charge for an inclusive date range.
///
/// Sum of day weights, minus half a day when the absence starts mid-day
/// (weekday start marked PM) and/or ends mid-day (weekday end marked AM).
/// A weekend-only range clamps to 0, never negative.
pub fn range_days(
    start: NaiveDate,
    end: NaiveDate,
    start_half: HalfDay,
    end_half: HalfDay,
) -> AppResult<f64> {
    if end < start {
        return Err(AppError::Validation(
            "end date must be >= start date".into(),
        ));
    }

    let mut total = 0.0;
    let mut cursor = start;
    while cursor <= end {
        total += day_weight(cursor);
        cursor = cursor.succ_opt().unwrap();
    }

    if day_weight(start) == 1.0 && start_half == HalfDay::Pm {
        total -= 0.5;
    }
    if day_weight(end) == 1.0 && end_half == HalfDay::Am {
        total -= 0.5;
    }

    Ok(total.max(0.0))
}
