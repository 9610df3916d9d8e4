// src/export/model.rs

use serde::Serialize;

/// Struttura "piatta" per export dei record di assenza.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub username: String,
    pub kind: String,
    pub start_at: String,
    pub end_at: String,
    pub days: f64,
    pub minutes: Option<i32>,
    pub note: String,
}

/// Header per CSV / JSON
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id", "username", "kind", "start_at", "end_at", "days", "minutes", "note",
    ]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.username.clone(),
        r.kind.clone(),
        r.start_at.clone(),
        r.end_at.clone(),
        r.days.to_string(),
        r.minutes.map(|m| m.to_string()).unwrap_or_default(),
        r.note.clone(),
    ]
}
