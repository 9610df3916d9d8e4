//! Monthly accrual job: credits every active user once per calendar
//! month. Designed to be invoked on any cadence (cron, timer, by hand);
//! the job_runs marker is the idempotence gate, not caller discipline.

use crate::config::Config;
use crate::core::ledger::apply_delta;
use crate::db::log::ledlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_job_run, job_run_exists, load_active_users};
use crate::errors::AppResult;
use crate::models::tx_source::TxSource;
use crate::utils::date::today_in;
use chrono::{Datelike, Local, NaiveDate};

pub const JOB_NAME: &str = "monthly_accrual";

/// Day of month on which the accrual fires. The sole trigger condition.
pub const ACCRUAL_DAY: u32 = 21;

pub struct AccrualLogic;

impl AccrualLogic {
    /// Run the accrual for `as_of` (default: today in the org offset).
    ///
    /// Returns Ok(true) when the credits ran, Ok(false) on a no-op
    /// (wrong day, or this month already has a marker). The per-user
    /// credit loop and the marker insert are one transaction: a crash
    /// mid-run leaves no marker and no partial credits, so a retry
    /// reprocesses everyone exactly once.
    pub fn run(pool: &mut DbPool, cfg: &Config, as_of: Option<NaiveDate>) -> AppResult<bool> {
        let current = as_of.unwrap_or_else(|| today_in(cfg.tz()));

        if current.day() != ACCRUAL_DAY {
            return Ok(false);
        }

        let tx = pool.conn.transaction()?;

        if job_run_exists(&tx, JOB_NAME, current.month(), current.year())? {
            return Ok(false);
        }

        let users = load_active_users(&tx)?;
        for user in &users {
            apply_delta(
                &tx,
                user.id,
                cfg.accrual_amount,
                TxSource::MonthlyAccrual,
                None,
            )?;
        }

        insert_job_run(
            &tx,
            JOB_NAME,
            current.month(),
            current.year(),
            &Local::now().to_rfc3339(),
        )?;

        ledlog(
            &tx,
            "accrue",
            &format!("{}-{:02}", current.year(), current.month()),
            &format!(
                "Credited {} user(s) with {} day(s) each",
                users.len(),
                cfg.accrual_amount
            ),
        )?;

        tx.commit()?;
        Ok(true)
    }
}
