use crate::core::ledger::apply_delta;
use crate::db::log::ledlog;
use crate::db::pool::DbPool;
use crate::db::queries::{require_live_record, tombstone_record};
use crate::errors::AppResult;
use crate::models::tx_source::TxSource;
use crate::ui::messages::info;
use crate::utils::fmt_days;
use chrono::Local;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Tombstone a record, refunding its charge first.
    ///
    /// Zero-charge records (LATE/EARLY, weekend-only ranges) get no
    /// ledger entry. Refund and tombstone are one transaction.
    pub fn apply(pool: &mut DbPool, record_id: i64) -> AppResult<()> {
        let tx = pool.conn.transaction()?;

        let rec = require_live_record(&tx, record_id)?;

        if rec.days > 0.0 {
            apply_delta(
                &tx,
                rec.user_id,
                rec.days,
                TxSource::DeleteRecord,
                Some(rec.id),
            )?;
        }

        tombstone_record(&tx, rec.id, &Local::now().to_rfc3339())?;

        ledlog(
            &tx,
            "del",
            &format!("record {}", rec.id),
            &format!("Refunded {} day(s)", fmt_days(rec.days, false)),
        )?;

        tx.commit()?;

        info(format!(
            "Deleted record {} (refunded {} day(s)).",
            record_id,
            fmt_days(rec.days, false)
        ));
        Ok(())
    }
}
