//! Line-ending detection and normalization

/// A text line terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix `\n`
    Lf,
    /// Windows `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// The platform's conventional terminator
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }
}

/// Detect the dominant line ending of `text`.
///
/// CrLf wins when CRLF terminators outnumber bare LF ones; everything else,
/// including single-line text, is Lf.
pub fn detect_line_ending(text: &str) -> LineEnding {
    let crlf = text.matches("\r\n").count();
    let bare_lf = text.matches('\n').count() - crlf;
    if crlf > bare_lf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    }
}

/// Rewrite every terminator (CRLF, bare CR, bare LF) to `eol`.
pub fn normalize_line_endings(text: &str, eol: LineEnding) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    match eol {
        LineEnding::Lf => unified,
        LineEnding::CrLf => unified.replace('\n', "\r\n"),
    }
}

/// Strip trailing spaces and tabs from every line, preserving the
/// terminators themselves.
pub fn trim_trailing_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in text.split_inclusive('\n') {
        let (line, ending) = match segment.strip_suffix("\r\n") {
            Some(line) => (line, "\r\n"),
            None => match segment.strip_suffix('\n') {
                Some(line) => (line, "\n"),
                None => (segment, ""),
            },
        };
        out.push_str(line.trim_end_matches([' ', '\t']));
        out.push_str(ending);
    }
    out
}
