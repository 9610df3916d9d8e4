//! Database statistics for the `db --info` command.

use crate::errors::AppResult;
use rusqlite::Connection;

#[derive(Debug)]
pub struct DbStats {
    pub users: i64,
    pub active_users: i64,
    pub live_records: i64,
    pub deleted_records: i64,
    pub ledger_rows: i64,
    pub job_runs: i64,
}

fn count(conn: &Connection, sql: &str) -> AppResult<i64> {
    Ok(conn.query_row(sql, [], |row| row.get(0))?)
}

pub fn collect_stats(conn: &Connection) -> AppResult<DbStats> {
    Ok(DbStats {
        users: count(conn, "SELECT COUNT(*) FROM users")?,
        active_users: count(conn, "SELECT COUNT(*) FROM users WHERE is_active = 1")?,
        live_records: count(
            conn,
            "SELECT COUNT(*) FROM leave_records WHERE deleted_at IS NULL",
        )?,
        deleted_records: count(
            conn,
            "SELECT COUNT(*) FROM leave_records WHERE deleted_at IS NOT NULL",
        )?,
        ledger_rows: count(conn, "SELECT COUNT(*) FROM ledger")?,
        job_runs: count(conn, "SELECT COUNT(*) FROM job_runs")?,
    })
}
