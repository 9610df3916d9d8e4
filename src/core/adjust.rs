use crate::core::ledger::apply_delta;
use crate::db::log::ledlog;
use crate::db::pool::DbPool;
use crate::db::queries::require_user;
use crate::errors::AppResult;
use crate::models::tx_source::TxSource;
use crate::ui::messages::success;
use crate::utils::fmt_days;

pub struct AdjustLogic;

impl AdjustLogic {
    /// Apply a signed manual correction to a user's balance.
    /// Goes through the Ledger like every other mutation.
    pub fn apply(pool: &mut DbPool, username: &str, amount: f64) -> AppResult<f64> {
        let tx = pool.conn.transaction()?;

        let user = require_user(&tx, username)?;
        let new_balance = apply_delta(&tx, user.id, amount, TxSource::AdminAdjust, None)?;

        ledlog(
            &tx,
            "adjust",
            username,
            &format!("Adjusted by {} day(s)", fmt_days(amount, true)),
        )?;

        tx.commit()?;

        success(format!(
            "Adjusted {} by {} day(s), balance {}.",
            username,
            fmt_days(amount, true),
            fmt_days(new_balance, false)
        ));

        Ok(new_balance)
    }
}
