use crate::core::calculator::normalize::normalize_date;
use crate::core::calculator::workdays::{day_weight, range_days};
use crate::errors::{AppError, AppResult};
use crate::models::half_day::HalfDay;
use crate::models::record_type::RecordType;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Synthetic business-hour boundaries used for display/ordering.
/// Elapsed time is never computed from these.
fn workday_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}
fn workday_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap()
}
fn midday_end() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}
fn midday_start() -> NaiveTime {
    NaiveTime::from_hms_opt(13, 0, 0).unwrap()
}

/// Calculator output: the fractional day charge plus the normalized
/// start/end pair for the record. Transient: consumed immediately by
/// the record insert and the Ledger deduction.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveCharge {
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub days: f64,
}

/// Validated request, one variant per record type with only the fields
/// that type actually uses; half markers on a FULL_DAY are unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum ChargeSpec {
    FullDay {
        date: NaiveDate,
    },
    HalfAm {
        date: NaiveDate,
    },
    HalfPm {
        date: NaiveDate,
    },
    Range {
        start: NaiveDate,
        end: NaiveDate,
        start_half: HalfDay,
        end_half: HalfDay,
    },
    Minutes {
        kind: RecordType,
        date: NaiveDate,
        minutes: i32,
    },
}

impl ChargeSpec {
    /// Validate raw request fields into a spec.
    ///
    /// `start`/`end` are already-normalized dates (see normalize_date);
    /// a missing end falls back to the start date. LATE/EARLY require a
    /// positive minute count. Half markers default to AM (start) and PM
    /// (end), i.e. full-day assumption at both ends of a range.
    pub fn new(
        kind: RecordType,
        start: NaiveDate,
        end: Option<NaiveDate>,
        start_half: Option<HalfDay>,
        end_half: Option<HalfDay>,
        minutes: Option<i32>,
    ) -> AppResult<Self> {
        let end = end.unwrap_or(start);

        match kind {
            RecordType::FullDay => Ok(ChargeSpec::FullDay { date: start }),
            RecordType::HalfAm => Ok(ChargeSpec::HalfAm { date: start }),
            RecordType::HalfPm => Ok(ChargeSpec::HalfPm { date: start }),
            RecordType::Range => {
                if end < start {
                    return Err(AppError::Validation(
                        "end date must be >= start date".into(),
                    ));
                }
                Ok(ChargeSpec::Range {
                    start,
                    end,
                    start_half: start_half.unwrap_or(HalfDay::Am),
                    end_half: end_half.unwrap_or(HalfDay::Pm),
                })
            }
            RecordType::Late | RecordType::Early => {
                let m = minutes.filter(|m| *m > 0).ok_or_else(|| {
                    AppError::Validation("minutes is required for LATE/EARLY".into())
                })?;
                Ok(ChargeSpec::Minutes {
                    kind,
                    date: start,
                    minutes: m,
                })
            }
        }
    }

    pub fn kind(&self) -> RecordType {
        match self {
            ChargeSpec::FullDay { .. } => RecordType::FullDay,
            ChargeSpec::HalfAm { .. } => RecordType::HalfAm,
            ChargeSpec::HalfPm { .. } => RecordType::HalfPm,
            ChargeSpec::Range { .. } => RecordType::Range,
            ChargeSpec::Minutes { kind, .. } => *kind,
        }
    }

    /// Half markers to persist with the record (RANGE only).
    pub fn halves(&self) -> (Option<HalfDay>, Option<HalfDay>) {
        match self {
            ChargeSpec::Range {
                start_half,
                end_half,
                ..
            } => (Some(*start_half), Some(*end_half)),
            _ => (None, None),
        }
    }

    /// Pure charge computation. No side effects, no I/O.
    pub fn compute(&self) -> AppResult<LeaveCharge> {
        match *self {
            ChargeSpec::FullDay { date } => Ok(LeaveCharge {
                start_at: date.and_time(workday_start()),
                end_at: date.and_time(workday_end()),
                days: day_weight(date),
            }),
            ChargeSpec::HalfAm { date } => Ok(LeaveCharge {
                start_at: date.and_time(workday_start()),
                end_at: date.and_time(midday_end()),
                days: if day_weight(date) == 1.0 { 0.5 } else { 0.0 },
            }),
            ChargeSpec::HalfPm { date } => Ok(LeaveCharge {
                start_at: date.and_time(midday_start()),
                end_at: date.and_time(workday_end()),
                days: if day_weight(date) == 1.0 { 0.5 } else { 0.0 },
            }),
            ChargeSpec::Range {
                start,
                end,
                start_half,
                end_half,
            } => Ok(LeaveCharge {
                start_at: start.and_time(workday_start()),
                end_at: end.and_time(workday_end()),
                days: range_days(start, end, start_half, end_half)?,
            }),
            ChargeSpec::Minutes { date, .. } => Ok(LeaveCharge {
                start_at: date.and_time(workday_start()),
                end_at: date.and_time(workday_start()),
                days: 0.0,
            }),
        }
    }
}

/// Convenience entry: raw strings → normalized dates → validated spec → charge.
/// This is the contract the command handlers call.
#[allow(clippy::too_many_arguments)]
pub fn build_charge(
    kind: RecordType,
    start: Option<&str>,
    end: Option<&str>,
    start_half: Option<HalfDay>,
    end_half: Option<HalfDay>,
    minutes: Option<i32>,
    offset: FixedOffset,
) -> AppResult<(ChargeSpec, LeaveCharge)> {
    let sd = normalize_date(start, offset)?;
    let ed = match end {
        Some(raw) => Some(normalize_date(Some(raw), offset)?),
        None => None,
    };

    let spec = ChargeSpec::new(kind, sd, ed, start_half, end_half, minutes)?;
    let charge = spec.compute()?;
    Ok((spec, charge))
}
