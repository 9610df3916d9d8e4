use crate::config::Config;
use crate::core::calculator::charge::ChargeSpec;
use crate::core::calculator::normalize::normalize_date;
use crate::core::ledger::{SETTLE_EPSILON, apply_delta};
use crate::db::log::ledlog;
use crate::db::pool::DbPool;
use crate::db::queries::{require_live_record, update_record};
use crate::errors::AppResult;
use crate::models::half_day::HalfDay;
use crate::models::leave_record::LeaveRecord;
use crate::models::record_type::RecordType;
use crate::models::tx_source::TxSource;
use crate::ui::messages::success;
use crate::utils::fmt_days;
use chrono::Local;

/// High-level business logic for the `edit` command.
pub struct UpdateLogic;

impl UpdateLogic {
    /// Re-shape an existing record.
    ///
    /// The record type is fixed at creation; dates, halves, minutes and
    /// note can change. The charge is recomputed and the difference
    /// `prev - new` settles through the Ledger (a shrinking charge
    /// refunds, a growing one deducts more). Deltas at or below the
    /// settle epsilon leave the ledger untouched: timestamps may move
    /// without the balance changing.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        record_id: i64,
        start: Option<&str>,
        end: Option<&str>,
        start_half: Option<HalfDay>,
        end_half: Option<HalfDay>,
        minutes: Option<i32>,
        note: Option<String>,
    ) -> AppResult<LeaveRecord> {
        let tz = cfg.tz();
        let tx = pool.conn.transaction()?;

        let mut rec = require_live_record(&tx, record_id)?;
        let prev_days = rec.days;

        //
        // 1. Effective inputs: explicit argument, else the stored value
        //
        let sd = match start {
            Some(raw) => normalize_date(Some(raw), tz)?,
            None => rec.start_at.date(),
        };
        let ed = match end {
            Some(raw) => normalize_date(Some(raw), tz)?,
            None => rec.end_at.date(),
        };
        let eff_minutes = minutes.or(rec.minutes);

        let (sh, eh) = match rec.kind {
            RecordType::Range => (
                start_half.or(rec.start_half),
                end_half.or(rec.end_half),
            ),
            _ => (None, None),
        };

        //
        // 2. Recompute with the stored type
        //
        let spec = ChargeSpec::new(rec.kind, sd, Some(ed), sh, eh, eff_minutes)?;
        let charge = spec.compute()?;

        //
        // 3. Settle the difference
        //
        let delta = prev_days - charge.days;
        if delta.abs() > SETTLE_EPSILON {
            apply_delta(&tx, rec.user_id, delta, TxSource::AdminAdjust, Some(rec.id))?;
        }

        //
        // 4. Rewrite the record
        //
        let (new_sh, new_eh) = spec.halves();
        rec.start_at = charge.start_at;
        rec.end_at = charge.end_at;
        rec.days = charge.days;
        rec.start_half = new_sh;
        rec.end_half = new_eh;
        rec.minutes = eff_minutes;
        if let Some(n) = note {
            rec.note = Some(n);
        }
        rec.updated_at = Local::now().to_rfc3339();

        update_record(&tx, &rec)?;

        ledlog(
            &tx,
            "edit",
            &format!("record {}", rec.id),
            &format!(
                "Charge {} → {} day(s)",
                fmt_days(prev_days, false),
                fmt_days(charge.days, false)
            ),
        )?;

        tx.commit()?;

        success(format!(
            "Record {} updated: charge {} → {} day(s).",
            rec.id,
            fmt_days(prev_days, false),
            fmt_days(charge.days, false)
        ));

        Ok(rec)
    }
}
