use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{missing_config_keys, run_config_migration};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Manage the configuration file.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                println!("📄 {}:\n", path.display());
                println!("{}", fs::read_to_string(&path)?);
            } else {
                info("No config file found, defaults are in effect.");
            }
            return Ok(());
        }

        if *check {
            let missing = missing_config_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing key(s): {}. Run `config --migrate` to add defaults.",
                    missing.join(", ")
                ));
            }
            return Ok(());
        }

        if *migrate {
            if !run_config_migration()? {
                info("Configuration already up to date.");
            }
            return Ok(());
        }

        info("Nothing to do: specify --print, --check or --migrate.");
    }

    Ok(())
}
