use super::half_day::HalfDay;
use super::record_type::RecordType;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// Storage format for leave_records.start_at / end_at.
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Serialize)]
pub struct LeaveRecord {
    pub id: i64,
    pub user_id: i64,               // ⇔ leave_records.user_id
    pub kind: RecordType,           // ⇔ leave_records.kind
    pub start_at: NaiveDateTime,    // ⇔ leave_records.start_at (TEXT "YYYY-MM-DD HH:MM")
    pub end_at: NaiveDateTime,      // ⇔ leave_records.end_at
    pub days: f64,                  // ⇔ leave_records.days (REAL, Calculator output)
    pub start_half: Option<HalfDay>, // ⇔ leave_records.start_half (RANGE only)
    pub end_half: Option<HalfDay>,  // ⇔ leave_records.end_half (RANGE only)
    pub minutes: Option<i32>,       // ⇔ leave_records.minutes (LATE/EARLY only)
    pub note: Option<String>,       // ⇔ leave_records.note
    pub created_at: String,         // ⇔ leave_records.created_at (TEXT, ISO8601)
    pub updated_at: String,         // ⇔ leave_records.updated_at
    pub deleted_at: Option<String>, // ⇔ leave_records.deleted_at (tombstone)
}

impl LeaveRecord {
    /// Constructor for records created from the CLI.
    /// - `id = 0` until inserted
    /// - `created_at`/`updated_at` = now() in ISO8601
    /// - `deleted_at = None` (live record)
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: i64,
        kind: RecordType,
        start_at: NaiveDateTime,
        end_at: NaiveDateTime,
        days: f64,
        start_half: Option<HalfDay>,
        end_half: Option<HalfDay>,
        minutes: Option<i32>,
        note: Option<String>,
    ) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            user_id,
            kind,
            start_at,
            end_at,
            days,
            start_half,
            end_half,
            minutes,
            note,
            created_at: now.clone(),
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn start_str(&self) -> String {
        self.start_at.format(DATETIME_FMT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_at.format(DATETIME_FMT).to_string()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
