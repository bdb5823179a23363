//! Non-fatal parse irregularities collected during extraction

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// First line of a `.txt` test is not `key=title` (or the file is empty)
    MalformedHeader,
    /// A parameter line could not be split into key and value
    MalformedParameter,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MalformedHeader => write!(f, "malformed header"),
            DiagnosticKind::MalformedParameter => write!(f, "malformed parameter"),
        }
    }
}

/// A single irregularity, pointing at the offending line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    /// Zero-based line index in the file, counting `\n`, `\r\n` and `\r` breaks
    pub line: usize,
    pub kind: DiagnosticKind,
    /// Trimmed text of the offending line
    pub text: String,
}

impl Diagnostic {
    pub fn new(path: PathBuf, line: usize, kind: DiagnosticKind, text: &str) -> Self {
        Self {
            path,
            line,
            kind,
            text: text.trim().to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {:?}",
            self.path.display(),
            self.line,
            self.kind,
            self.text
        )
    }
}
