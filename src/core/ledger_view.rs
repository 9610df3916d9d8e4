use crate::core::ledger::{SETTLE_EPSILON, round2};
use crate::db::pool::DbPool;
use crate::db::queries::{load_ledger_for_user, require_user};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::fmt_days;
use ansi_term::Colour;

pub struct LedgerViewLogic;

impl LedgerViewLogic {
    /// Print a user's ledger in creation (replay) order.
    ///
    /// With `verify`, replay the signed deltas from 0 and check every
    /// balance_after plus the user's current balance against the
    /// reconstruction.
    pub fn print(pool: &mut DbPool, username: &str, verify: bool) -> AppResult<()> {
        let user = require_user(&pool.conn, username)?;
        let txs = load_ledger_for_user(&pool.conn, user.id)?;

        if txs.is_empty() {
            info(format!("No ledger transactions for {}.", username));
            return Ok(());
        }

        let id_w = txs
            .iter()
            .map(|t| t.id.to_string().len())
            .max()
            .unwrap_or(2);

        println!("📒 Ledger for {}:\n", username);

        for t in &txs {
            // pad before coloring, ANSI codes would skew the width
            let amount = format!("{:>8}", fmt_days(t.change_amount, true));
            let colored = if t.change_amount < 0.0 {
                Colour::Red.paint(amount).to_string()
            } else {
                Colour::Green.paint(amount).to_string()
            };

            let reference = t
                .reference_id
                .map(|r| format!(" [record {}]", r))
                .unwrap_or_default();

            println!(
                "{:>id_w$}: {} | {:<15} {} => balance {}{}",
                t.id,
                t.created_at,
                t.source.to_db_str(),
                colored,
                fmt_days(t.balance_after, false),
                reference,
                id_w = id_w
            );
        }

        if verify {
            let mut replayed = 0.0;
            for t in &txs {
                replayed = round2(replayed + t.change_amount);
                if (replayed - t.balance_after).abs() > SETTLE_EPSILON {
                    return Err(AppError::Other(format!(
                        "Ledger replay mismatch at transaction {}: replayed {}, stored {}",
                        t.id, replayed, t.balance_after
                    )));
                }
            }

            if (replayed - user.balance).abs() > SETTLE_EPSILON {
                return Err(AppError::Other(format!(
                    "Ledger replay mismatch: replayed {}, current balance {}",
                    replayed, user.balance
                )));
            }

            println!();
            success(format!(
                "Ledger verified: {} transaction(s) replay to balance {}.",
                txs.len(),
                fmt_days(user.balance, false)
            ));
        }

        Ok(())
    }
}
