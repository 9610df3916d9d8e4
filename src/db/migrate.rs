use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the baseline schema: users, leave_records, ledger, job_runs.
///
/// The ledger is append-only by contract: rows are inserted by
/// core::ledger::apply_delta and never updated or deleted.
/// UNIQUE(job_name, run_month, run_year) on job_runs is the idempotence
/// gate for the monthly accrual job.
fn create_baseline_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            username   TEXT NOT NULL UNIQUE,
            balance    REAL NOT NULL DEFAULT 0,
            is_active  INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS leave_records (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    INTEGER NOT NULL REFERENCES users(id),
            kind       TEXT NOT NULL CHECK(kind IN ('FULL_DAY','HALF_AM','HALF_PM','RANGE','LATE','EARLY')),
            start_at   TEXT NOT NULL,
            end_at     TEXT NOT NULL,
            days       REAL NOT NULL DEFAULT 0,
            start_half TEXT CHECK(start_half IN ('AM','PM')),
            end_half   TEXT CHECK(end_half IN ('AM','PM')),
            minutes    INTEGER,
            note       TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted_at TEXT
        );

        CREATE TABLE IF NOT EXISTS ledger (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id       INTEGER NOT NULL REFERENCES users(id),
            change_amount REAL NOT NULL,
            balance_after REAL NOT NULL,
            source        TEXT NOT NULL CHECK(source IN ('MONTHLY_ACCRUAL','LEAVE_USED','ADMIN_ADJUST','DELETE_RECORD')),
            reference_id  INTEGER,
            created_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS job_runs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            job_name    TEXT NOT NULL,
            run_month   INTEGER NOT NULL,
            run_year    INTEGER NOT NULL,
            executed_at TEXT NOT NULL,
            UNIQUE(job_name, run_month, run_year)
        );

        CREATE INDEX IF NOT EXISTS idx_records_user_start ON leave_records(user_id, start_at);
        CREATE INDEX IF NOT EXISTS idx_records_user_deleted ON leave_records(user_id, deleted_at);
        CREATE INDEX IF NOT EXISTS idx_ledger_user ON ledger(user_id);
        "#,
    )?;
    Ok(())
}

/// Early builds stored leave_records without the free-text note column.
fn migrate_add_note_column(conn: &Connection) -> Result<(), Error> {
    let version = "20260112_0003_add_note_to_leave_records";

    // 1) Verifica se già applicata
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // già applicata
    }

    // 2) Column may already exist on fresh baselines, detect first
    let mut stmt = conn.prepare("PRAGMA table_info('leave_records')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    let mut has_note = false;
    for c in cols {
        if c? == "note" {
            has_note = true;
            break;
        }
    }

    if !has_note {
        conn.execute("ALTER TABLE leave_records ADD COLUMN note TEXT;", [])
            .map_err(|e| {
                Error::SqliteFailure(
                    rusqlite::ffi::Error::new(1),
                    Some(format!("Failed to add 'note' column: {}", e)),
                )
            })?;

        success(format!(
            "Migration applied: {} → added 'note' to leave_records table",
            version
        ));
    }

    // 3) Marca come applicata
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added note column to leave_records')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Baseline schema
    let fresh = !table_exists(conn, "users")?;
    create_baseline_tables(conn)?;

    if fresh {
        success("Created leave ledger tables (modern schema).");
    }

    // 3) Incremental migrations (each marks itself in `log`)
    migrate_add_note_column(conn)?;

    Ok(())
}
