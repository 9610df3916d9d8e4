use crate::errors::{AppError, AppResult};
use crate::models::half_day::HalfDay;
use crate::models::leave_record::{DATETIME_FMT, LeaveRecord};
use crate::models::record_type::RecordType;
use crate::models::transaction::LedgerTx;
use crate::models::tx_source::TxSource;
use crate::models::user::User;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ------------------------------------------------------------------
// Row mappers
// ------------------------------------------------------------------

pub fn map_user_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        balance: row.get("balance")?,
        is_active: row.get::<_, i64>("is_active")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn map_record_row(row: &Row) -> Result<LeaveRecord> {
    let kind_str: String = row.get("kind")?;
    let kind = RecordType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRecordType(kind_str.clone())),
        )
    })?;

    let start_str: String = row.get("start_at")?;
    let start_at = NaiveDateTime::parse_from_str(&start_str, DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(start_str.clone())),
        )
    })?;

    let end_str: String = row.get("end_at")?;
    let end_at = NaiveDateTime::parse_from_str(&end_str, DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(end_str.clone())),
        )
    })?;

    let start_half: Option<String> = row.get("start_half")?;
    let end_half: Option<String> = row.get("end_half")?;

    Ok(LeaveRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        start_at,
        end_at,
        days: row.get("days")?,
        start_half: start_half.as_deref().and_then(HalfDay::from_input),
        end_half: end_half.as_deref().and_then(HalfDay::from_input),
        minutes: row.get("minutes")?,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        deleted_at: row.get("deleted_at")?,
    })
}

pub fn map_tx_row(row: &Row) -> Result<LedgerTx> {
    let source_str: String = row.get("source")?;
    let source = TxSource::from_db_str(&source_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!(
                "Invalid ledger source: {}",
                source_str
            ))),
        )
    })?;

    Ok(LedgerTx {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        change_amount: row.get("change_amount")?,
        balance_after: row.get("balance_after")?,
        source,
        reference_id: row.get("reference_id")?,
        created_at: row.get("created_at")?,
    })
}

// ------------------------------------------------------------------
// Users
// ------------------------------------------------------------------

pub fn insert_user(conn: &Connection, user: &User) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (username, balance, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            user.username,
            user.balance,
            if user.is_active { 1 } else { 0 },
            user.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_user_by_username(conn: &Connection, username: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users WHERE username = ?1")?;
    Ok(stmt.query_row([username], map_user_row).optional()?)
}

pub fn find_user_by_id(conn: &Connection, id: i64) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_user_row).optional()?)
}

/// Resolve a username or fail with UserNotFound.
pub fn require_user(conn: &Connection, username: &str) -> AppResult<User> {
    find_user_by_username(conn, username)?
        .ok_or_else(|| AppError::UserNotFound(username.to_string()))
}

pub fn load_all_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users ORDER BY username ASC")?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Users included in the monthly accrual run, in stable id order.
pub fn load_active_users(conn: &Connection) -> AppResult<Vec<User>> {
    let mut stmt = conn.prepare("SELECT * FROM users WHERE is_active = 1 ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_user_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_user_active(conn: &Connection, id: i64, active: bool) -> AppResult<()> {
    conn.execute(
        "UPDATE users SET is_active = ?1 WHERE id = ?2",
        params![if active { 1 } else { 0 }, id],
    )?;
    Ok(())
}

/// Balance column write. ONLY core::ledger::apply_delta may call this;
/// every other module settles through the Ledger.
pub(crate) fn write_user_balance(conn: &Connection, id: i64, balance: f64) -> AppResult<()> {
    conn.execute(
        "UPDATE users SET balance = ?1 WHERE id = ?2",
        params![balance, id],
    )?;
    Ok(())
}

// ------------------------------------------------------------------
// Leave records
// ------------------------------------------------------------------

pub fn insert_record(conn: &Connection, rec: &LeaveRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO leave_records (user_id, kind, start_at, end_at, days, start_half, end_half, minutes, note, created_at, updated_at, deleted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            rec.user_id,
            rec.kind.to_db_str(),
            rec.start_str(),
            rec.end_str(),
            rec.days,
            rec.start_half.map(|h| h.as_str()),
            rec.end_half.map(|h| h.as_str()),
            rec.minutes,
            rec.note,
            rec.created_at,
            rec.updated_at,
            rec.deleted_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load a record regardless of tombstone state.
pub fn find_record(conn: &Connection, id: i64) -> AppResult<Option<LeaveRecord>> {
    let mut stmt = conn.prepare("SELECT * FROM leave_records WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_record_row).optional()?)
}

/// Load a live (non-tombstoned) record or fail with RecordNotFound.
pub fn require_live_record(conn: &Connection, id: i64) -> AppResult<LeaveRecord> {
    let mut stmt =
        conn.prepare("SELECT * FROM leave_records WHERE id = ?1 AND deleted_at IS NULL")?;
    stmt.query_row([id], map_record_row)
        .optional()?
        .ok_or(AppError::RecordNotFound(id))
}

/// Rewrite the mutable fields of a record (charge output + request inputs).
pub fn update_record(conn: &Connection, rec: &LeaveRecord) -> AppResult<()> {
    conn.execute(
        "UPDATE leave_records
         SET start_at = ?1, end_at = ?2, days = ?3,
             start_half = ?4, end_half = ?5,
             minutes = ?6, note = ?7, updated_at = ?8
         WHERE id = ?9",
        params![
            rec.start_str(),
            rec.end_str(),
            rec.days,
            rec.start_half.map(|h| h.as_str()),
            rec.end_half.map(|h| h.as_str()),
            rec.minutes,
            rec.note,
            rec.updated_at,
            rec.id,
        ],
    )?;
    Ok(())
}

/// Soft-delete: set deleted_at, keep the row for audit.
pub fn tombstone_record(conn: &Connection, id: i64, when: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE leave_records SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
        params![when, id],
    )?;
    Ok(())
}

/// One page of a user's live records, newest start first.
/// Returns (rows, total live count for the same filter).
pub fn load_records_page(
    conn: &Connection,
    user_id: i64,
    bounds: Option<(NaiveDate, NaiveDate)>,
    page: usize,
    page_size: usize,
) -> AppResult<(Vec<LeaveRecord>, usize)> {
    let (filter_sql, from, to) = match bounds {
        Some((a, b)) => (
            " AND start_at >= ?2 AND start_at <= ?3",
            format!("{} 00:00", a.format("%Y-%m-%d")),
            format!("{} 23:59", b.format("%Y-%m-%d")),
        ),
        None => ("", String::new(), String::new()),
    };

    let count_sql = format!(
        "SELECT COUNT(*) FROM leave_records WHERE user_id = ?1 AND deleted_at IS NULL{}",
        filter_sql
    );
    let select_sql = format!(
        "SELECT * FROM leave_records WHERE user_id = ?1 AND deleted_at IS NULL{}
         ORDER BY start_at DESC LIMIT {} OFFSET {}",
        filter_sql,
        page_size,
        (page - 1) * page_size
    );

    let total: i64 = if bounds.is_some() {
        conn.query_row(&count_sql, params![user_id, from, to], |row| row.get(0))?
    } else {
        conn.query_row(&count_sql, params![user_id], |row| row.get(0))?
    };

    let mut stmt = conn.prepare(&select_sql)?;
    let mut out = Vec::new();
    if bounds.is_some() {
        let rows = stmt.query_map(params![user_id, from, to], map_record_row)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let rows = stmt.query_map(params![user_id], map_record_row)?;
        for r in rows {
            out.push(r?);
        }
    }

    Ok((out, total as usize))
}

/// All live records (every user), oldest start first. Used by export.
pub fn load_live_records(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<LeaveRecord>> {
    let mut out = Vec::new();

    match bounds {
        Some((a, b)) => {
            let from = format!("{} 00:00", a.format("%Y-%m-%d"));
            let to = format!("{} 23:59", b.format("%Y-%m-%d"));
            let mut stmt = conn.prepare(
                "SELECT * FROM leave_records
                 WHERE deleted_at IS NULL AND start_at >= ?1 AND start_at <= ?2
                 ORDER BY start_at ASC",
            )?;
            let rows = stmt.query_map(params![from, to], map_record_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT * FROM leave_records WHERE deleted_at IS NULL ORDER BY start_at ASC",
            )?;
            let rows = stmt.query_map([], map_record_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

// ------------------------------------------------------------------
// Ledger (append-only)
// ------------------------------------------------------------------

pub fn insert_ledger_tx(conn: &Connection, tx: &LedgerTx) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO ledger (user_id, change_amount, balance_after, source, reference_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            tx.user_id,
            tx.change_amount,
            tx.balance_after,
            tx.source.to_db_str(),
            tx.reference_id,
            tx.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full ledger for one user in creation order (replay order).
pub fn load_ledger_for_user(conn: &Connection, user_id: i64) -> AppResult<Vec<LedgerTx>> {
    let mut stmt = conn.prepare("SELECT * FROM ledger WHERE user_id = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([user_id], map_tx_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ------------------------------------------------------------------
// Job runs
// ------------------------------------------------------------------

pub fn job_run_exists(
    conn: &Connection,
    job_name: &str,
    month: u32,
    year: i32,
) -> AppResult<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM job_runs
         WHERE job_name = ?1 AND run_month = ?2 AND run_year = ?3
         LIMIT 1",
    )?;
    Ok(stmt.exists(params![job_name, month, year])?)
}

pub fn insert_job_run(
    conn: &Connection,
    job_name: &str,
    month: u32,
    year: i32,
    executed_at: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO job_runs (job_name, run_month, run_year, executed_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![job_name, month, year, executed_at],
    )?;
    Ok(())
}
