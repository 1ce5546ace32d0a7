//! Encoding-aware text reading and normalizing writes
//!
//! [`read_text`] detects the file's encoding and dominant line ending while
//! decoding; [`write_text`] normalizes line endings and trailing whitespace
//! on the way out, then encodes in the requested encoding.

mod encoding;
mod eol;

pub use encoding::{decode_bytes, detect_encoding, encode, TextEncoding};
pub use eol::{detect_line_ending, normalize_line_endings, trim_trailing_whitespace, LineEnding};

use crate::error::{IoResultExt, Result};
use std::path::Path;

/// A decoded text file together with what was detected about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    /// Decoded content, original line endings intact
    pub content: String,
    /// Detected encoding
    pub encoding: TextEncoding,
    /// Dominant line ending of the content
    pub line_ending: LineEnding,
}

/// Options for [`write_text`]
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Target encoding
    pub encoding: TextEncoding,
    /// Normalize every terminator to this ending; `None` leaves them as-is
    pub line_ending: Option<LineEnding>,
    /// Strip trailing spaces and tabs from each line
    pub trim_trailing: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            line_ending: None,
            trim_trailing: false,
        }
    }
}

/// Read and decode a text file, detecting its encoding and line ending.
pub fn read_text(path: impl AsRef<Path>) -> Result<TextDocument> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_path(path)?;
    let (content, encoding) = decode_bytes(&bytes);
    let line_ending = detect_line_ending(&content);
    tracing::debug!(
        "read {} as {} ({} bytes)",
        path.display(),
        encoding.name(),
        bytes.len()
    );
    Ok(TextDocument {
        content,
        encoding,
        line_ending,
    })
}

/// Write text with the requested normalization and encoding.
pub fn write_text(path: impl AsRef<Path>, content: &str, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();

    let trimmed;
    let mut text = if options.trim_trailing {
        trimmed = trim_trailing_whitespace(content);
        trimmed.as_str()
    } else {
        content
    };

    let normalized;
    if let Some(eol) = options.line_ending {
        normalized = normalize_line_endings(text, eol);
        text = normalized.as_str();
    }

    std::fs::write(path, encode(text, options.encoding)).with_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_detects_encoding_and_eol() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFline one\r\nline two\r\n").unwrap();

        let doc = read_text(&path).unwrap();
        assert_eq!(doc.encoding, TextEncoding::Utf8Bom);
        assert_eq!(doc.line_ending, LineEnding::CrLf);
        assert_eq!(doc.content, "line one\r\nline two\r\n");
    }

    #[test]
    fn test_write_text_normalizes_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let options = WriteOptions {
            line_ending: Some(LineEnding::Lf),
            trim_trailing: true,
            ..Default::default()
        };
        write_text(&path, "a  \r\nb\t\r\n", &options).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"a\nb\n");
    }

    #[test]
    fn test_write_then_read_round_trip_utf16() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wide.txt");

        let options = WriteOptions {
            encoding: TextEncoding::Utf16Le,
            ..Default::default()
        };
        write_text(&path, "héllo\n", &options).unwrap();

        let doc = read_text(&path).unwrap();
        assert_eq!(doc.encoding, TextEncoding::Utf16Le);
        assert_eq!(doc.content, "héllo\n");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_text(dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.path().unwrap(), &dir.path().join("absent.txt"));
    }
}
