use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::UpdateLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_optional_half;

/// Edit an existing leave record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        record_id,
        start,
        end,
        start_half,
        end_half,
        minutes,
        note,
    } = cmd
    {
        let sh = parse_optional_half(start_half.as_ref()).map_err(AppError::InvalidHalf)?;
        let eh = parse_optional_half(end_half.as_ref()).map_err(AppError::InvalidHalf)?;

        let mut pool = DbPool::new(&cfg.database)?;

        UpdateLogic::apply(
            &mut pool,
            cfg,
            *record_id,
            start.as_deref(),
            end.as_deref(),
            sh,
            eh,
            *minutes,
            note.clone(),
        )?;
    }

    Ok(())
}
