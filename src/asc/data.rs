use crate::asc::id::parse_hex_prefix;
use crate::types::frame::MAX_DATA_BYTES;

// Example: "02 10 01 00 00 00 00 00" -> [0x02, 0x10, 0x01, 0, 0, 0, 0, 0]
//
// Only tokens of exactly two characters occupy a byte slot; anything else is
// dropped without consuming one, which shifts the remaining bytes left.
// Downstream consumers rely on that shifting, so it must stay.
pub(crate) fn extract(region: &str) -> [u8; MAX_DATA_BYTES] {
    let mut data = [0u8; MAX_DATA_BYTES];
    let mut idx: usize = 0;

    for token in region.split_whitespace() {
        if idx == MAX_DATA_BYTES {
            break;
        }
        if token.len() != 2 {
            continue;
        }
        data[idx] = parse_hex_prefix(token) as u8;
        idx += 1;
    }

    // unset trailing positions stay zero
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_full_payload() {
        let data = extract("3E 42 03 00 39 00 03 01");
        assert_eq!(data, [0x3E, 0x42, 0x03, 0x00, 0x39, 0x00, 0x03, 0x01]);
    }

    #[test]
    fn zero_pads_short_payload() {
        let data = extract("02 10 01");
        assert_eq!(data, [0x02, 0x10, 0x01, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn empty_region_is_all_zero() {
        assert_eq!(extract(""), [0u8; MAX_DATA_BYTES]);
    }

    #[test]
    fn ignores_tokens_past_the_eighth() {
        let data = extract("01 02 03 04 05 06 07 08 09 0A");
        assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn malformed_token_does_not_consume_a_slot() {
        // nine tokens, one of them malformed: the eight valid ones land in
        // order, shifted over the dropped token
        let data = extract("01 02 7 03 04 05 06 07 08");
        assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8]);

        let data = extract("01 123 02");
        assert_eq!(data, [1, 2, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn two_char_garbage_still_occupies_a_slot() {
        // strtol semantics: "ZZ" -> 0, "4Z" -> 4, both keep their position
        let data = extract("ZZ 4Z 11");
        assert_eq!(data, [0x00, 0x04, 0x11, 0, 0, 0, 0, 0]);
    }
}
