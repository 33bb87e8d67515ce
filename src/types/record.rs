use serde::Serialize;

use crate::types::frame::ParsedFrame;

/// A [`ParsedFrame`] plus the five diagnostic classification columns.
///
/// Each derived field is either a short classification token or an empty
/// string. `sid` is non-empty only when `pci` is `"SF"` or `"FF"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiagnosticRecord {
    /// The decoded frame this record was derived from.
    pub frame: ParsedFrame,

    /// Addressing scope: `"0"` functional, `"-1"` physical request,
    /// `"1"` physical response or non-diagnostic.
    pub phy: String,

    /// Direction: `"Req"` or `"Res"`.
    pub dir: String,

    /// Target address, e.g. `"7E0"` (11-bit) or `"10"` (29-bit sub-field).
    pub ta: String,

    /// ISO-TP protocol-control type: `"SF"`, `"FF"`, `"CF"`, `"FC"` or empty.
    pub pci: String,

    /// UDS service identifier as 2-digit hex, when the PCI exposes one.
    pub sid: String,
}
