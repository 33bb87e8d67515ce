use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::asc::{abs_time, line};
use crate::types::errors::AscParseError;
use crate::DiagLog;

/// Decodes a bus-trace file into a [`DiagLog`].
///
/// The file is read **line by line**; the parser discovers an optional
/// absolute-time header (a line starting with `date`) and then decodes one
/// [`DiagnosticRecord`](crate::DiagnosticRecord) per line matching the
/// receive-frame grammar. Lines
/// that do not match are silently filtered, in keeping with trace files that
/// interleave frames with comments, bus statistics and trigger events.
///
/// # Returns
/// - `Ok(DiagLog)` with `records` in file order and `absolute_time` set when
///   a `date` header was found.
/// - `Err(AscParseError)` only when the file itself cannot be opened or read;
///   malformed lines never fail the run.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DiagLog, AscParseError> {
    let path: &Path = path.as_ref();

    let file: File = File::open(path).map_err(|source| AscParseError::OpenFile {
        path: path.display().to_string(),
        source,
    })?;
    let reader: BufReader<File> = BufReader::new(file);

    let mut log: DiagLog = DiagLog::default();
    let mut found_abs_time: bool = false;

    for read in reader.lines() {
        let text: String = read.map_err(|source| AscParseError::Read {
            path: path.display().to_string(),
            source,
        })?;

        // only the first valid date header is used
        if !found_abs_time {
            if let Some(time) = abs_time::from_line(&text) {
                log.absolute_time = time;
                found_abs_time = true;
                continue;
            }
        }

        if let Some(record) = line::decode(&text) {
            log.records.push(record);
        }
    }

    log::debug!(
        "decoded {} record(s) from '{}'",
        log.records.len(),
        path.display()
    );

    Ok(log)
}
