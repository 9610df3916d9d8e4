use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::collect_stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Manage the database: migrations, integrity checks, maintenance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Database migrations up to date.");
            return Ok(());
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity check passed.");
            } else {
                return Err(AppError::Other(format!(
                    "Integrity check failed: {}",
                    result
                )));
            }
            return Ok(());
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database optimized (VACUUM).");
            return Ok(());
        }

        if *show_info {
            let stats = collect_stats(&pool.conn)?;
            println!("🗄️  Database: {}\n", cfg.database);
            println!("Users:           {} ({} active)", stats.users, stats.active_users);
            println!(
                "Leave records:   {} live, {} deleted",
                stats.live_records, stats.deleted_records
            );
            println!("Ledger rows:     {}", stats.ledger_rows);
            println!("Job runs:        {}", stats.job_runs);
            return Ok(());
        }

        info("Nothing to do: specify --migrate, --check, --vacuum or --info.");
    }

    Ok(())
}
