use crate::config::Config;
use crate::core::calculator::charge::build_charge;
use crate::core::ledger::apply_delta;
use crate::db::log::ledlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_record, require_user};
use crate::errors::AppResult;
use crate::models::half_day::HalfDay;
use crate::models::leave_record::LeaveRecord;
use crate::models::record_type::RecordType;
use crate::models::tx_source::TxSource;
use crate::ui::messages::success;
use crate::utils::fmt_days;

/// High-level business logic for the `add` command.
pub struct RequestLogic;

impl RequestLogic {
    /// Create a leave record for a user.
    ///
    /// The Calculator produces the charge; when it is positive the
    /// deduction settles through the Ledger (LEAVE_USED, referencing
    /// the new record). Record insert and deduction are one transaction.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        username: &str,
        kind: RecordType,
        start: Option<&str>,
        end: Option<&str>,
        start_half: Option<HalfDay>,
        end_half: Option<HalfDay>,
        minutes: Option<i32>,
        note: Option<String>,
    ) -> AppResult<LeaveRecord> {
        //
        // 1. Compute the charge (pure, validates the request)
        //
        let (spec, charge) = build_charge(
            kind,
            start,
            end,
            start_half,
            end_half,
            minutes,
            cfg.tz(),
        )?;

        //
        // 2. Settle + insert atomically
        //
        let tx = pool.conn.transaction()?;

        let user = require_user(&tx, username)?;

        let (sh, eh) = spec.halves();
        let mut rec = LeaveRecord::new(
            user.id,
            spec.kind(),
            charge.start_at,
            charge.end_at,
            charge.days,
            sh,
            eh,
            minutes,
            note,
        );
        rec.id = insert_record(&tx, &rec)?;

        let new_balance = if charge.days > 0.0 {
            apply_delta(&tx, user.id, -charge.days, TxSource::LeaveUsed, Some(rec.id))?
        } else {
            user.balance
        };

        ledlog(
            &tx,
            "add",
            &format!("record {}", rec.id),
            &format!(
                "{} {} for {} ({} day(s))",
                kind.to_db_str(),
                rec.start_str(),
                username,
                fmt_days(charge.days, false)
            ),
        )?;

        tx.commit()?;

        success(format!(
            "Recorded {} for {}: {} day(s) charged, balance {}.",
            kind.to_db_str(),
            username,
            fmt_days(charge.days, false),
            fmt_days(new_balance, false)
        ));

        Ok(rec)
    }
}
