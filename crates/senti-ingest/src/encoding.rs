#![deny(unsafe_code)]

/// Encoding detected for an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }
}

/// Decode raw file bytes as UTF-8, falling back to ISO-8859-1.
///
/// Latin-1 maps every byte to the Unicode code point of the same value, so
/// the fallback never fails and non-UTF-8 exports ingest losslessly.
pub fn decode_bytes(bytes: &[u8]) -> (String, TextEncoding) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), TextEncoding::Utf8),
        Err(_) => {
            let text: String = bytes.iter().map(|b| char::from(*b)).collect();
            (text, TextEncoding::Latin1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        let (text, encoding) = decode_bytes("caf\u{e9},review\n".as_bytes());
        assert_eq!(encoding, TextEncoding::Utf8);
        assert_eq!(text, "caf\u{e9},review\n");
    }

    #[test]
    fn latin1_fallback_decodes_accented_bytes() {
        // "café" in ISO-8859-1: 0xE9 is not valid UTF-8.
        let bytes = [b'c', b'a', b'f', 0xE9];
        let (text, encoding) = decode_bytes(&bytes);
        assert_eq!(encoding, TextEncoding::Latin1);
        assert_eq!(text, "caf\u{e9}");
    }

    #[test]
    fn empty_input_is_utf8() {
        let (text, encoding) = decode_bytes(b"");
        assert_eq!(encoding, TextEncoding::Utf8);
        assert!(text.is_empty());
    }
}
