//! Hex and text conversions for moving bytes across a text boundary.

use crate::error::Result;

/// Renders bytes as uppercase hex, two characters per byte.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_upper(bytes)
}

/// Parses a hex string into bytes.
///
/// Either case is accepted. An odd length or a non-hex character fails
/// with [`AesError::InvalidHexFormat`](crate::AesError::InvalidHexFormat).
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Decodes bytes as UTF-8, replacing invalid sequences.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AesError;
    use hex::FromHexError;

    #[test]
    fn hex_is_uppercase() {
        assert_eq!(to_hex([0x00, 0xab, 0x7f]), "00AB7F");
        assert_eq!(to_hex([0u8; 0]), "");
    }

    #[test]
    fn parses_both_cases() {
        assert_eq!(from_hex("00ab7F").unwrap(), vec![0x00, 0xab, 0x7f]);
        assert_eq!(from_hex(&to_hex(b"key")).unwrap(), b"key");
    }

    #[test]
    fn odd_length_is_rejected() {
        let err = from_hex("abc").unwrap_err();
        assert!(matches!(err, AesError::InvalidHexFormat(FromHexError::OddLength)));
    }

    #[test]
    fn non_hex_character_is_rejected() {
        let err = from_hex("zz").unwrap_err();
        assert!(matches!(
            err,
            AesError::InvalidHexFormat(FromHexError::InvalidHexCharacter { .. })
        ));
    }

    #[test]
    fn text_decoding_is_lossy() {
        assert_eq!(bytes_to_text(b"hello"), "hello");
        assert_eq!(bytes_to_text(&[0x68, 0xff]), "h\u{fffd}");
    }
}
