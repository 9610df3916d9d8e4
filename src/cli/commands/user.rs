use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::users::UserLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// Manage users: create, list, activate/deactivate.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        add,
        balance,
        list,
        activate,
        deactivate,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(username) = add {
            UserLogic::create(&mut pool, username, *balance)?;
            return Ok(());
        }

        if *list {
            UserLogic::list(&mut pool, cfg)?;
            return Ok(());
        }

        if let Some(username) = activate {
            UserLogic::set_active(&mut pool, username, true)?;
            return Ok(());
        }

        if let Some(username) = deactivate {
            UserLogic::set_active(&mut pool, username, false)?;
            return Ok(());
        }

        return Err(AppError::Other(
            "Nothing to do: specify --add, --list, --activate or --deactivate.".into(),
        ));
    }

    Ok(())
}
