use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::adjust::AdjustLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Apply a signed manual balance adjustment.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Adjust { username, amount } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        AdjustLogic::apply(&mut pool, username, *amount)?;
    }

    Ok(())
}
