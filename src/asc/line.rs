use crate::asc::{data, id};
use crate::types::{frame::ParsedFrame, record::DiagnosticRecord};
use crate::uds;

/// Literal marker of a received classic-CAN data frame. The fixed-width gap
/// between `Rx` and `d` is part of the grammar.
pub(crate) const RX_MARKER: &str = " Rx   d ";

/// Tokenizer output: the fields needed by the rest of the pipeline, borrowed
/// from the input line.
pub(crate) struct RawTokens<'a> {
    pub timestamp: f64,
    pub id_token: &'a str,
    /// Slice of the line starting at the first data byte.
    pub data_region: &'a str,
}

// Example:
// 0.016728 1  17334410x       Rx   d 8 3E 42 03 00 39 00 03 01
pub(crate) fn tokenize(line: &str) -> Option<RawTokens<'_>> {
    // lines without the marker are not decodable records
    let marker: usize = line.find(RX_MARKER)?;

    // the data region starts after the whitespace that follows the
    // byte-count digits
    let after_marker: &str = &line[marker + RX_MARKER.len()..];
    let gap: usize = after_marker.find(' ')?;
    let data_region: &str = &after_marker[gap + 1..];

    // five meaningful tokens: timestamp, channel (discarded), id, "Rx", "d",
    // then the declared byte count
    let mut parts = line.split_whitespace();
    let timestamp: f64 = parts.next()?.parse().ok()?;
    parts.next()?.parse::<i64>().ok()?; // channel
    let id_token: &str = parts.next()?;
    if parts.next()? != "Rx" {
        return None;
    }
    if parts.next()? != "d" {
        return None;
    }
    parts.next()?.parse::<u32>().ok()?; // declared byte count

    Some(RawTokens {
        timestamp,
        id_token,
        data_region,
    })
}

/// Runs the full per-line pipeline: tokenize, normalize the identifier,
/// extract the data bytes, classify. `None` means the line is filtered.
pub(crate) fn decode(line: &str) -> Option<DiagnosticRecord> {
    let tokens: RawTokens<'_> = tokenize(line)?;
    let norm: id::NormalizedId = id::normalize(tokens.id_token);

    let frame = ParsedFrame {
        timestamp: tokens.timestamp,
        id_text: norm.text,
        id_value: norm.value,
        is_extended: norm.is_extended,
        data: data::extract(tokens.data_region),
    };

    Some(uds::classify(frame))
}
