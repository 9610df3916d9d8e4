use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accrual::AccrualLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date;

/// Run the monthly accrual job.
///
/// Meant to be invoked from a timer (cron, systemd) on any cadence;
/// a daily call is enough. The job itself decides whether to run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Accrue { as_of } = cmd {
        let as_of_date = match as_of {
            Some(raw) => Some(parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let executed = AccrualLogic::run(&mut pool, cfg, as_of_date)?;

        if executed {
            success(format!(
                "Monthly accrual executed: every active user credited {} day(s).",
                cfg.accrual_amount
            ));
        } else {
            info("Monthly accrual: nothing to do.");
        }
    }

    Ok(())
}
