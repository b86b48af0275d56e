//! Lowercase hex rendering for statement and proof encodings.

/// Encode bytes as lowercase hex.
pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// True if `s` is exactly 64 lowercase hex characters (a SHA-256 rendering).
///
/// Digest comparisons in the proof protocol are exact string comparisons, so
/// uppercase spellings of the same digest must be rejected, not normalized.
pub(crate) fn is_sha256_hex(s: &str) -> bool {
    s.len() == 64
        && s.chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_lowercase() {
        assert_eq!(hex_encode(&[0x00, 0xff, 0xa5]), "00ffa5");
        assert_eq!(hex_encode(&[]), "");
    }

    #[test]
    fn sha256_hex_shape() {
        assert!(is_sha256_hex(&"ab".repeat(32)));
        assert!(!is_sha256_hex(&"AB".repeat(32)));
        assert!(!is_sha256_hex(&"ab".repeat(31)));
        assert!(!is_sha256_hex(&"zz".repeat(32)));
    }
}
