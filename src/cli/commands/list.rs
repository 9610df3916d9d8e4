use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// List a user's leave records.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        username,
        period,
        page,
        page_size,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        ListLogic::apply(
            &mut pool,
            cfg,
            username,
            period.as_deref(),
            *page,
            *page_size,
        )?;
    }

    Ok(())
}
