/// Identifier token after normalization.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct NormalizedId {
    /// Uppercase hex text, trailing `'X'` stripped.
    pub text: String,
    /// Numeric value of `text`.
    pub value: u32,
    /// `true` when the token carried the `x`/`X` extension marker.
    pub is_extended: bool,
}

// Example: "17334410x" -> { text: "17334410", value: 0x17334410, is_extended: true }
pub(crate) fn normalize(id_token: &str) -> NormalizedId {
    let mut text: String = id_token.to_ascii_uppercase();

    // a final X marks a 29-bit extended identifier and is not part of the hex value
    let is_extended: bool = text.ends_with('X');
    if is_extended {
        text.pop();
    }

    let value: u32 = parse_hex_prefix(&text);

    NormalizedId {
        text,
        value,
        is_extended,
    }
}

/// Converts the longest leading run of hex digits, `strtol` style.
///
/// Anything without a hex prefix (including the empty string) yields 0, so
/// identifier and data-byte conversion stays total over arbitrary tokens.
pub(crate) fn parse_hex_prefix(s: &str) -> u32 {
    let end: usize = s
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(s.len());
    u32::from_str_radix(&s[..end], 16).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_strips_lowercase_marker() {
        let id = normalize("17334410x");
        assert_eq!(id.text, "17334410");
        assert_eq!(id.value, 0x1733_4410);
        assert!(id.is_extended);
    }

    #[test]
    fn strips_uppercase_marker() {
        let id = normalize("18DAF110X");
        assert_eq!(id.text, "18DAF110");
        assert!(id.is_extended);
    }

    #[test]
    fn standard_id_is_not_extended() {
        let id = normalize("7e0");
        assert_eq!(id.text, "7E0");
        assert_eq!(id.value, 0x7E0);
        assert!(!id.is_extended);
    }

    #[test]
    fn empty_token_yields_zero_value() {
        let id = normalize("");
        assert_eq!(id.text, "");
        assert_eq!(id.value, 0);
        assert!(!id.is_extended);
    }

    #[test]
    fn lone_marker_leaves_empty_text() {
        let id = normalize("x");
        assert_eq!(id.text, "");
        assert_eq!(id.value, 0);
        assert!(id.is_extended);
    }

    #[test]
    fn hex_prefix_stops_at_first_non_digit() {
        assert_eq!(parse_hex_prefix("7DFZZ"), 0x7DF);
        assert_eq!(parse_hex_prefix("ZZ"), 0);
        assert_eq!(parse_hex_prefix("FF"), 0xFF);
    }
}
