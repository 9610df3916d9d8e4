use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::require_user;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_amount};
use crate::utils::fmt_days;

/// Show a user's current leave balance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance { username } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let user = require_user(&pool.conn, username)?;

        println!(
            "💼 {}: balance {}{}{} day(s){}",
            user.username,
            color_for_amount(user.balance),
            fmt_days(user.balance, false),
            RESET,
            if user.is_active { "" } else { " (inactive)" }
        );
    }

    Ok(())
}
