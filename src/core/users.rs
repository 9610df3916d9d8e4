use crate::config::Config;
use crate::core::ledger::apply_delta;
use crate::db::log::ledlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    find_user_by_username, insert_user, load_all_users, require_user, set_user_active,
};
use crate::errors::{AppError, AppResult};
use crate::models::tx_source::TxSource;
use crate::models::user::User;
use crate::ui::messages::success;
use crate::utils::fmt_days;
use crate::utils::table::{Column, Table};

pub struct UserLogic;

impl UserLogic {
    /// Create a user.
    ///
    /// The balance column starts at 0; an opening balance is settled as
    /// an ADMIN_ADJUST credit in the same transaction, so replaying the
    /// ledger reconstructs the balance from the very first row.
    pub fn create(pool: &mut DbPool, username: &str, opening: Option<f64>) -> AppResult<User> {
        let tx = pool.conn.transaction()?;

        if find_user_by_username(&tx, username)?.is_some() {
            return Err(AppError::UserExists(username.to_string()));
        }

        let mut user = User::new(username);
        user.id = insert_user(&tx, &user)?;

        if let Some(amount) = opening
            && amount != 0.0
        {
            user.balance = apply_delta(&tx, user.id, amount, TxSource::AdminAdjust, None)?;
        }

        ledlog(
            &tx,
            "user",
            username,
            &format!(
                "Created user (opening balance {})",
                fmt_days(user.balance, false)
            ),
        )?;

        tx.commit()?;

        success(format!(
            "Created user {} with balance {}.",
            username,
            fmt_days(user.balance, false)
        ));

        Ok(user)
    }

    pub fn list(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let users = load_all_users(&pool.conn)?;

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table = Table::new(
            vec![
                Column {
                    header: "ID".into(),
                    width: 5,
                },
                Column {
                    header: "USERNAME".into(),
                    width: 20,
                },
                Column {
                    header: "BALANCE".into(),
                    width: 8,
                },
                Column {
                    header: "ACTIVE".into(),
                    width: 6,
                },
            ],
            sep,
        );

        for u in &users {
            table.add_row(vec![
                u.id.to_string(),
                u.username.clone(),
                fmt_days(u.balance, false),
                if u.is_active { "yes".into() } else { "no".into() },
            ]);
        }

        println!("{}", table.render());
        println!("{} user(s).", users.len());
        Ok(())
    }

    /// Flip the active flag. Inactive users keep their balance and
    /// history but are skipped by the monthly accrual.
    pub fn set_active(pool: &mut DbPool, username: &str, active: bool) -> AppResult<()> {
        let tx = pool.conn.transaction()?;

        let user = require_user(&tx, username)?;
        set_user_active(&tx, user.id, active)?;

        ledlog(
            &tx,
            "user",
            username,
            if active { "Activated" } else { "Deactivated" },
        )?;

        tx.commit()?;

        success(format!(
            "User {} is now {}.",
            username,
            if active { "active" } else { "inactive" }
        ));
        Ok(())
    }
}
