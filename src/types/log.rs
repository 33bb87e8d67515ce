use crate::types::{abs_time::AbsoluteTime, record::DiagnosticRecord};

/// In-memory result of decoding one trace file.
///
/// Records are kept in file order, one per matching input line. Lines that do
/// not match the frame grammar leave no trace here.
#[derive(Debug, Clone, Default)]
pub struct DiagLog {
    /// Absolute start time extracted from the `date` header, if present.
    pub absolute_time: AbsoluteTime,

    /// All decoded records in file order.
    pub records: Vec<DiagnosticRecord>,
}

impl DiagLog {
    /// Resets the log to its default (empty) state.
    pub fn clear(&mut self) {
        self.absolute_time.clear();
        self.records = Vec::default();
    }
}
