use serde::Serialize;

/// Number of data bytes carried by a classic CAN frame.
pub const MAX_DATA_BYTES: usize = 8;

/// One decodable trace line after tokenizing, identifier normalization and
/// data-byte extraction.
///
/// Invariants guaranteed by the parser:
/// - `data` always holds exactly [`MAX_DATA_BYTES`] bytes, missing trailing
///   positions set to `0`;
/// - `id_text` is uppercase hex and never carries the trailing `'X'`
///   extension marker of the source log.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedFrame {
    /// Relative timestamp in seconds, as it appeared in the trace.
    pub timestamp: f64,

    /// Normalized identifier, e.g. `"7E0"` or `"18DAF110"`.
    pub id_text: String,

    /// Numeric value of `id_text`.
    pub id_value: u32,

    /// `true` when the identifier carried the `x`/`X` 29-bit marker.
    pub is_extended: bool,

    /// Payload bytes, zero-padded to [`MAX_DATA_BYTES`].
    pub data: [u8; MAX_DATA_BYTES],
}
