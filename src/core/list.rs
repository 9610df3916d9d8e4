use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_records_page, require_user};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date::range_bounds;
use crate::utils::fmt_days;
use crate::utils::table::{Column, Table};

/// High-level business logic for the `list` command.
pub struct ListLogic;

impl ListLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        username: &str,
        period: Option<&str>,
        page: usize,
        page_size: Option<usize>,
    ) -> AppResult<()> {
        let bounds = match period {
            Some(p) => Some(range_bounds(p).map_err(AppError::InvalidDate)?),
            None => None,
        };

        let page = page.max(1);
        let page_size = page_size.unwrap_or(cfg.page_size).max(1);

        let user = require_user(&pool.conn, username)?;
        let (records, total) = load_records_page(&pool.conn, user.id, bounds, page, page_size)?;

        if records.is_empty() {
            info(format!("No leave records for {}.", username));
            return Ok(());
        }

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table = Table::new(
            vec![
                Column {
                    header: "ID".into(),
                    width: 5,
                },
                Column {
                    header: "TYPE".into(),
                    width: 9,
                },
                Column {
                    header: "START".into(),
                    width: 16,
                },
                Column {
                    header: "END".into(),
                    width: 16,
                },
                Column {
                    header: "DAYS".into(),
                    width: 5,
                },
                Column {
                    header: "MIN".into(),
                    width: 5,
                },
                Column {
                    header: "NOTE".into(),
                    width: 24,
                },
            ],
            sep,
        );

        for rec in &records {
            // ANSI codes would break fixed-width padding inside cells
            let minutes = rec
                .minutes
                .map(|m| m.to_string())
                .unwrap_or_else(|| "--".into());
            let note = rec.note.clone().unwrap_or_else(|| "--".into());

            table.add_row(vec![
                rec.id.to_string(),
                rec.kind.to_db_str().to_string(),
                rec.start_str(),
                rec.end_str(),
                fmt_days(rec.days, false),
                minutes,
                note,
            ]);
        }

        println!("{}", table.render());
        println!(
            "Page {}: {} of {} record(s), balance {}.",
            page,
            records.len(),
            total,
            fmt_days(user.balance, false)
        );

        Ok(())
    }
}
