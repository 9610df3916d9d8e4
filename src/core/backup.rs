use crate::config::Config;
use crate::db::log::ledlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(
        pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // ⛔ If destination file exists → ask confirmation
        if dest.exists() {
            println!(
                "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
                dest.display()
            );

            use std::io::{Write, stdin, stdout};

            let mut answer = String::new();
            print!("> ");
            stdout().flush().ok();

            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                println!("❌ Backup cancelled by user.");
                return Ok(());
            }
            println!();
        }

        // 3️⃣ Plain copy or zip archive
        if compress {
            let file = fs::File::create(dest)?;
            let mut zip = ZipWriter::new(file);

            let options: FileOptions<'_, ()> =
                FileOptions::default().compression_method(CompressionMethod::Deflated);

            zip.start_file("database.sqlite", options)
                .map_err(std::io::Error::other)?;

            let db_content = fs::read(src)?;
            std::io::Write::write_all(&mut zip, &db_content)?;

            zip.finish().map_err(std::io::Error::other)?;
        } else {
            fs::copy(src, dest)?;
        }

        ledlog(
            &pool.conn,
            "backup",
            &dest.display().to_string(),
            if compress {
                "Compressed backup created"
            } else {
                "Backup created"
            },
        )?;

        success(format!("📦 Backup created: {}", dest.display()));
        Ok(())
    }
}
