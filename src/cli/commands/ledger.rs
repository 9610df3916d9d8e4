use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger_view::LedgerViewLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Print (and optionally verify) a user's balance ledger.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ledger { username, verify } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        LedgerViewLogic::print(&mut pool, username, *verify)?;
    }

    Ok(())
}
