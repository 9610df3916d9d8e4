use crate::db::log::ledlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::model::RecordExport;
use crate::export::{ExportFormat, csv, fs_utils, json, notify_export_success};
use crate::models::user::User;
use crate::utils::date::range_bounds;
use std::collections::HashMap;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export all live leave records (optionally filtered by a period
    /// range) into a flat csv/json file.
    pub fn run(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let bounds = match range {
            Some(p) => Some(range_bounds(p).map_err(AppError::InvalidDate)?),
            None => None,
        };

        fs_utils::prepare_destination(file, force)?;

        let records = crate::db::queries::load_live_records(&pool.conn, bounds)?;

        // user_id → username lookup for the flat rows
        let users: HashMap<i64, User> = crate::db::queries::load_all_users(&pool.conn)?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let rows: Vec<RecordExport> = records
            .iter()
            .map(|rec| RecordExport {
                id: rec.id,
                username: users
                    .get(&rec.user_id)
                    .map(|u| u.username.clone())
                    .unwrap_or_else(|| rec.user_id.to_string()),
                kind: rec.kind.to_db_str().to_string(),
                start_at: rec.start_str(),
                end_at: rec.end_str(),
                days: rec.days,
                minutes: rec.minutes,
                note: rec.note.clone().unwrap_or_default(),
            })
            .collect();

        match format {
            ExportFormat::Csv => csv::write_csv(file, &rows)?,
            ExportFormat::Json => json::write_json(file, &rows)?,
        }

        ledlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} record(s) as {}", rows.len(), format.as_str()),
        )?;

        notify_export_success(format.as_str().to_uppercase().as_str(), Path::new(file));
        Ok(())
    }
}
