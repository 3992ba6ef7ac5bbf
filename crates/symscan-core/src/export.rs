use std::io::Write;
use std::path::Path;

use crate::aggregate::AggregateRow;
use crate::error::{Result, SymscanError};

pub const CSV_HEADER: [&str; 3] = ["Class", "Count", "Avg Confidence"];

/// Write aggregate rows as CSV to any writer.
pub fn write_csv<W: Write>(rows: &[AggregateRow], writer: W) -> Result<()> {
    if rows.is_empty() {
        return Err(SymscanError::NothingToExport);
    }

    let mut csv = csv::WriterBuilder::new().from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for row in rows {
        csv.write_record([
            row.class_name.clone(),
            row.count.to_string(),
            row.confidence_percent(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn to_csv_string(rows: &[AggregateRow]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Export to a file. Nothing is created when there are no rows.
pub fn export_csv(rows: &[AggregateRow], path: &Path) -> Result<()> {
    if rows.is_empty() {
        return Err(SymscanError::NothingToExport);
    }
    let file = std::fs::File::create(path)?;
    write_csv(rows, file)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Exported detection summary");
    Ok(())
}
