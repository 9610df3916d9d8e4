use crate::export::model::RecordExport;
use std::fs::File;
use std::io::BufWriter;

/// Scrive i record in JSON (pretty) nel file indicato.
pub fn write_json(path: &str, records: &[RecordExport]) -> std::io::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, records).map_err(std::io::Error::other)?;

    Ok(())
}
