use crate::export::model::{RecordExport, get_headers, record_to_row};
use csv::Writer;

/// Scrive i record in CSV nel file indicato.
pub fn write_csv(path: &str, records: &[RecordExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for r in records {
        wtr.write_record(record_to_row(r))?;
    }

    wtr.flush()?;
    Ok(())
}
