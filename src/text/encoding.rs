//! Text encoding detection and conversion
//!
//! Detection is BOM-first, then a UTF-8 validity check, then a Windows-1252
//! fallback for arbitrary byte soup. Decoding is lossy (invalid sequences
//! become U+FFFD) and always strips the BOM.

use encoding_rs::{UTF_16BE, UTF_16LE, WINDOWS_1252};

/// UTF-8 byte order mark
pub const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian byte order mark
pub const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
/// UTF-16 big-endian byte order mark
pub const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

/// A detected or requested text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8 without a byte order mark
    Utf8,
    /// UTF-8 with a byte order mark
    Utf8Bom,
    /// UTF-16 little-endian (BOM'd)
    Utf16Le,
    /// UTF-16 big-endian (BOM'd)
    Utf16Be,
    /// Windows-1252, the single-byte fallback
    Windows1252,
}

impl TextEncoding {
    /// Canonical label for logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Bom => "utf-8-bom",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Windows1252 => "windows-1252",
        }
    }
}

/// Sniff the encoding of raw file bytes.
///
/// BOMs win outright; BOM-less content is UTF-8 when it validates as such,
/// Windows-1252 otherwise. Empty input is UTF-8.
pub fn detect_encoding(bytes: &[u8]) -> TextEncoding {
    if bytes.starts_with(BOM_UTF8) {
        TextEncoding::Utf8Bom
    } else if bytes.starts_with(BOM_UTF16_LE) {
        TextEncoding::Utf16Le
    } else if bytes.starts_with(BOM_UTF16_BE) {
        TextEncoding::Utf16Be
    } else if std::str::from_utf8(bytes).is_ok() {
        TextEncoding::Utf8
    } else {
        TextEncoding::Windows1252
    }
}

/// Detect and decode in one step, stripping any BOM.
pub fn decode_bytes(bytes: &[u8]) -> (String, TextEncoding) {
    let encoding = detect_encoding(bytes);
    let text = match encoding {
        TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        TextEncoding::Utf8Bom => String::from_utf8_lossy(&bytes[BOM_UTF8.len()..]).into_owned(),
        TextEncoding::Utf16Le => UTF_16LE.decode(bytes).0.into_owned(),
        TextEncoding::Utf16Be => UTF_16BE.decode(bytes).0.into_owned(),
        TextEncoding::Windows1252 => WINDOWS_1252.decode(bytes).0.into_owned(),
    };
    (text, encoding)
}

/// Encode text in the given encoding, emitting a BOM where the encoding
/// carries one. Characters outside Windows-1252 are replaced with numeric
/// character references by the encoder.
pub fn encode(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf8Bom => {
            let mut out = BOM_UTF8.to_vec();
            out.extend_from_slice(text.as_bytes());
            out
        }
        TextEncoding::Utf16Le => {
            let mut out = BOM_UTF16_LE.to_vec();
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
            out
        }
        TextEncoding::Utf16Be => {
            let mut out = BOM_UTF16_BE.to_vec();
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_be_bytes());
            }
            out
        }
        TextEncoding::Windows1252 => WINDOWS_1252.encode(text).0.into_owned(),
    }
}
