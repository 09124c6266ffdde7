// Copyright 2026, School Management contributors
// Licensed under MIT OR Apache-2.0

//! General purpose utilities.

pub mod color;

/// Decodes a hex string, ignoring surrounding whitespace and an optional
/// `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode0x_accepts_prefixed_and_bare_hex() {
        assert_eq!(decode0x("0xdeadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode0x("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode0x(" 0x00 \n").unwrap(), vec![0x00]);
    }

    #[test]
    fn decode0x_rejects_non_hex() {
        assert!(decode0x("0xzz").is_err());
    }
}
