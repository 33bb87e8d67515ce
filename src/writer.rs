//! # writer
//!
//! Serialization of a [`DiagLog`] into the fixed 15-column CSV table.

use std::path::Path;

use crate::types::errors::CsvSaveError;
use crate::{DiagLog, DiagnosticRecord};

/// Column names, written once before any records.
pub const CSV_HEADER: [&str; 15] = [
    "time", "ID", "Phy", "Dir", "TA", "PCI", "SID", "Data1", "Data2", "Data3", "Data4", "Data5",
    "Data6", "Data7", "Data8",
];

/// Renders one record as its 15 CSV fields, in header order.
///
/// The timestamp keeps a fixed 6-digit fractional precision; data bytes are
/// rendered as 2-digit uppercase hex. Rendering is a pure function of the
/// record, so repeated calls yield identical rows.
pub fn csv_row(record: &DiagnosticRecord) -> [String; 15] {
    let frame = &record.frame;
    [
        format!("{:.6}", frame.timestamp),
        frame.id_text.clone(),
        record.phy.clone(),
        record.dir.clone(),
        record.ta.clone(),
        record.pci.clone(),
        record.sid.clone(),
        format!("{:02X}", frame.data[0]),
        format!("{:02X}", frame.data[1]),
        format!("{:02X}", frame.data[2]),
        format!("{:02X}", frame.data[3]),
        format!("{:02X}", frame.data[4]),
        format!("{:02X}", frame.data[5]),
        format!("{:02X}", frame.data[6]),
        format!("{:02X}", frame.data[7]),
    ]
}

/// Saves a [`DiagLog`] to `path` as CSV, header first, records in log order.
///
/// The header is written even when the log holds no records. The underlying
/// writer buffers internally, so rows are flushed to the file in batches.
pub fn save<P: AsRef<Path>>(log: &DiagLog, path: P) -> Result<(), CsvSaveError> {
    let path: &Path = path.as_ref();

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| CsvSaveError::CreateFile {
            path: path.display().to_string(),
            source,
        })?;

    wtr.write_record(CSV_HEADER)
        .map_err(|source| CsvSaveError::Write {
            path: path.display().to_string(),
            source,
        })?;

    for record in &log.records {
        wtr.write_record(csv_row(record))
            .map_err(|source| CsvSaveError::Write {
                path: path.display().to_string(),
                source,
            })?;
    }

    wtr.flush().map_err(|source| CsvSaveError::Flush {
        path: path.display().to_string(),
        source,
    })?;

    Ok(())
}
