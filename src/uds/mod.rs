//! # uds
//!
//! Diagnostic classification of decoded frames using fixed UDS / OBD-II /
//! ISO-TP conventions. Classification is total: every identifier and payload
//! maps to a defined value for all five columns, with empty strings for the
//! unclassifiable cases. Each frame is classified on its own; multi-frame
//! ISO-TP messages are not reassembled.

use std::ops::RangeInclusive;

use crate::types::{frame::ParsedFrame, record::DiagnosticRecord};

/// OBD-II functional broadcast request identifier.
const OBD_FUNCTIONAL_ID: u32 = 0x7DF;
/// OBD-II physical request identifier range.
const OBD_REQUEST_RANGE: RangeInclusive<u32> = 0x7E0..=0x7E7;
/// OBD-II physical response identifier range.
const OBD_RESPONSE_RANGE: RangeInclusive<u32> = 0x7E8..=0x7EF;

/// 29-bit functional-addressing prefix (ISO 15765-4).
const EXT_FUNCTIONAL_PREFIX: &str = "18DB";
/// 29-bit physical-response pattern: target address first, fixed tester
/// source `F1`.
const EXT_RESPONSE_PREFIX: &str = "18DAF1";
/// Conventional tester address inside a 29-bit diagnostic identifier.
const TESTER_ADDRESS: &str = "F1";

/// ISO-TP protocol-control-information type, taken from the top nibble of
/// the first payload byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    /// Single frame: complete message, payload starts at the second byte.
    Single,
    /// First frame of a segmented message; bytes 1-2 carry the total length.
    First,
    /// Consecutive frame of a segmented message.
    Consecutive,
    /// Flow control sent by the receiver.
    FlowControl,
}

impl FrameType {
    /// Classifies the leading PCI byte. Nibbles 4..=15 are reserved and
    /// yield `None`.
    pub fn from_pci_byte(byte: u8) -> Option<FrameType> {
        match byte >> 4 {
            0 => Some(FrameType::Single),
            1 => Some(FrameType::First),
            2 => Some(FrameType::Consecutive),
            3 => Some(FrameType::FlowControl),
            _ => None,
        }
    }

    /// Short token used in the CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            FrameType::Single => "SF",
            FrameType::First => "FF",
            FrameType::Consecutive => "CF",
            FrameType::FlowControl => "FC",
        }
    }
}

/// Derives the five classification columns for one frame.
pub fn classify(frame: ParsedFrame) -> DiagnosticRecord {
    let phy: &str = addressing_scope(&frame.id_text, frame.id_value);
    let dir: &str = direction(&frame.id_text, frame.id_value);
    let ta: String = target_address(&frame.id_text);

    let frame_type: Option<FrameType> = FrameType::from_pci_byte(frame.data[0]);
    let pci: String = frame_type.map(FrameType::as_str).unwrap_or("").to_string();
    let sid: String = service_id(frame_type, &frame.data);

    DiagnosticRecord {
        phy: phy.to_string(),
        dir: dir.to_string(),
        ta,
        pci,
        sid,
        frame,
    }
}

/// `"0"` functional, `"-1"` physical request, `"1"` everything else
/// (physical responses and non-diagnostic identifiers).
fn addressing_scope(id_text: &str, id_value: u32) -> &'static str {
    if id_value == OBD_FUNCTIONAL_ID || id_text.starts_with(EXT_FUNCTIONAL_PREFIX) {
        "0"
    } else if OBD_REQUEST_RANGE.contains(&id_value) {
        "-1"
    } else {
        "1"
    }
}

fn direction(id_text: &str, id_value: u32) -> &'static str {
    if id_text.starts_with(EXT_RESPONSE_PREFIX) || OBD_RESPONSE_RANGE.contains(&id_value) {
        "Res"
    } else {
        "Req"
    }
}

/// Target address from the structural position inside the identifier.
///
/// For 8-character 29-bit identifiers with the `18` diagnostic prefix, the
/// address pair holding `F1` marks the tester; the TA is the other pair
/// (offsets 4..6 and 6..8 of the normalized text). An 11-bit identifier is
/// its own target address. Everything else is unaddressed.
fn target_address(id_text: &str) -> String {
    if id_text.len() == 8 && id_text.starts_with("18") {
        match (id_text.get(4..6), id_text.get(6..8)) {
            (Some(TESTER_ADDRESS), Some(low)) => low.to_string(),
            (Some(high), Some(TESTER_ADDRESS)) => high.to_string(),
            _ => String::new(),
        }
    } else if id_text.len() == 3 {
        id_text.to_string()
    } else {
        String::new()
    }
}

/// The UDS service identifier sits right after the PCI framing: second byte
/// of a single frame, third byte of a first frame (bytes 1-2 encode the
/// total length). Other frame types expose no SID.
fn service_id(frame_type: Option<FrameType>, data: &[u8]) -> String {
    match frame_type {
        Some(FrameType::Single) => format!("{:02X}", data[1]),
        Some(FrameType::First) => format!("{:02X}", data[2]),
        _ => String::new(),
    }
}
