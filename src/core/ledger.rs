//! Balance Ledger: the single gate through which every balance change
//! passes. Balances are read, checked, written and audited inside the
//! caller's open SQLite transaction so the pair of writes is indivisible.

use crate::db::queries::{find_user_by_id, insert_ledger_tx, write_user_balance};
use crate::errors::{AppError, AppResult};
use crate::models::transaction::LedgerTx;
use crate::models::tx_source::TxSource;
use rusqlite::Connection;

/// Settlement deltas at or below this threshold are floating noise,
/// not an audit event.
pub const SETTLE_EPSILON: f64 = 1e-9;

/// Balances are stored with 2-decimal precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Apply a signed balance delta to a user and append the audit row.
///
/// `amount` < 0 is a deduction, > 0 a credit. A delta that would drive
/// the balance negative fails with InsufficientBalance and writes
/// nothing. Must be called on an open transaction; the balance update
/// and the ledger append commit or roll back together with it.
///
/// Returns the new balance.
pub fn apply_delta(
    conn: &Connection,
    user_id: i64,
    amount: f64,
    source: TxSource,
    reference_id: Option<i64>,
) -> AppResult<f64> {
    let user = find_user_by_id(conn, user_id)?
        .ok_or_else(|| AppError::UserNotFound(format!("id {}", user_id)))?;

    let new_balance = user.balance + amount;
    if new_balance < 0.0 {
        return Err(AppError::InsufficientBalance);
    }

    let rounded = round2(new_balance);
    write_user_balance(conn, user_id, rounded)?;
    insert_ledger_tx(
        conn,
        &LedgerTx::new(user_id, amount, rounded, source, reference_id),
    )?;

    Ok(rounded)
}
