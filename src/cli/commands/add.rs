use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::request::RequestLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::record_type::RecordType;
use crate::utils::time::parse_optional_half;

/// Record a leave request for a user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        username,
        kind,
        start,
        end,
        start_half,
        end_half,
        minutes,
        note,
    } = cmd
    {
        //
        // 1. Parse record type (mandatory)
        //
        let kind = RecordType::from_input(kind).ok_or_else(|| {
            AppError::InvalidRecordType(format!(
                "'{}'. Use FULL_DAY, HALF_AM, HALF_PM, RANGE, LATE or EARLY.",
                kind
            ))
        })?;

        //
        // 2. Parse half markers (optional, RANGE only)
        //
        let sh = parse_optional_half(start_half.as_ref()).map_err(AppError::InvalidHalf)?;
        let eh = parse_optional_half(end_half.as_ref()).map_err(AppError::InvalidHalf)?;

        //
        // 3. Open DB and execute
        //
        let mut pool = DbPool::new(&cfg.database)?;

        RequestLogic::apply(
            &mut pool,
            cfg,
            username,
            kind,
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
