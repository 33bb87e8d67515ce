//! # uds2csv
//!
//! Decode **UDS/ISO-TP** traffic from Vector ASC bus traces into a CSV table.
//!
//! ## Highlights
//! - **ASC decoder**: read receive-frame lines of a `.asc` trace into a [`DiagLog`].
//! - **Per-line pipeline**: tokenizer → identifier normalizer → data-byte extractor →
//!   diagnostic classifier → CSV serializer; no state is carried across lines.
//! - **Diagnostic columns**: addressing scope, direction, target address, ISO-TP
//!   frame type and UDS service identifier, derived with fixed OBD-II/ISO 15765
//!   conventions (`uds::classify`).
//! - **CSV output**: fixed 15-column table via `writer::save`, header always present.
//!

pub mod asc;
pub mod uds;
pub mod writer;
#[doc(hidden)]
pub mod types;

// Top-level re-exports (appear under Crate Items → Structs)
#[doc(inline)]
pub use crate::types::{
    abs_time::AbsoluteTime,
    errors::{AscParseError, CsvSaveError},
    frame::{MAX_DATA_BYTES, ParsedFrame},
    log::DiagLog,
    record::DiagnosticRecord,
};

#[doc(inline)]
pub use crate::uds::FrameType;
