use super::tx_source::TxSource;
use chrono::Local;
use serde::Serialize;

/// One immutable row of the balance audit trail.
/// Replaying change_amount in id order from 0 reconstructs the balance.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerTx {
    pub id: i64,
    pub user_id: i64,              // ⇔ ledger.user_id
    pub change_amount: f64,        // ⇔ ledger.change_amount (signed)
    pub balance_after: f64,        // ⇔ ledger.balance_after
    pub source: TxSource,          // ⇔ ledger.source
    pub reference_id: Option<i64>, // ⇔ ledger.reference_id (originating record)
    pub created_at: String,        // ⇔ ledger.created_at (TEXT, ISO8601)
}

impl LedgerTx {
    pub fn new(
        user_id: i64,
        change_amount: f64,
        balance_after: f64,
        source: TxSource,
        reference_id: Option<i64>,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            change_amount,
            balance_after,
            source,
            reference_id,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
