// Line-oriented parsers for the two test-definition formats
//
// Both formats are scanned line by line rather than handed to a real TOML
// parser: test files routinely contain content that is not valid TOML and the
// only thing extracted is the key of each `key=value` line.

pub mod text_format;
pub mod toml_format;

use crate::diagnostics::Diagnostic;
use crate::error::LineError;
use crate::params::Namespace;
use std::fmt;
use std::path::Path;

/// Files that carry a `.txt` suffix but are build scripts, not tests
const EXCLUDED_FILE_NAMES: &[&str] = &["CMakeLists.txt"];

/// Recognized test-definition formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFormat {
    /// `.txt`: header line, then `key=value` lines; indentation marks workload keys
    Text,
    /// `.toml`: general block followed by `[[test.workload]]` blocks
    Toml,
}

impl TestFormat {
    pub const ALL: [TestFormat; 2] = [TestFormat::Text, TestFormat::Toml];

    pub fn extension(&self) -> &'static str {
        match self {
            TestFormat::Text => ".txt",
            TestFormat::Toml => ".toml",
        }
    }

    /// Format implied by a file name suffix
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| name.ends_with(format.extension()))
    }

    pub fn parse(&self, path: &Path, content: &str) -> ParsedFile {
        match self {
            TestFormat::Text => text_format::parse(path, content),
            TestFormat::Toml => toml_format::parse(path, content),
        }
    }
}

impl fmt::Display for TestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestFormat::Text => write!(f, "text"),
            TestFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Whether a collected file must be left out of parsing altogether
pub fn is_excluded_file(name: &str) -> bool {
    EXCLUDED_FILE_NAMES.contains(&name)
}

/// Everything extracted from a single test file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    pub format: TestFormat,
    /// Test title from the header line (`.txt` only)
    pub title: Option<String>,
    /// Keys in declaration order; may contain repeats
    pub params: Vec<(Namespace, String)>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedFile {
    pub fn new(format: TestFormat) -> Self {
        Self {
            format,
            title: None,
            params: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn record(&mut self, namespace: Namespace, key: &str) {
        self.params.push((namespace, key.to_string()));
    }

    /// Distinct keys recorded under `namespace`, in first-seen order
    pub fn keys(&self, namespace: Namespace) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for (ns, key) in &self.params {
            if *ns == namespace && !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        keys
    }
}

/// Splits `key=value` once on the first `=` and trims both halves
pub(crate) fn split_param(line: &str) -> Result<(&str, &str), LineError> {
    line.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or(LineError::MissingSeparator)
}

/// Splits on `\n`, `\r\n` and lone `\r`
///
/// Unlike `str::lines` a trailing empty segment is kept, so the number of
/// segments is always one more than the number of line breaks.
pub(crate) fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(content);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(|c: char| c == '\r' || c == '\n') {
            Some(idx) => {
                let break_len = if text[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[idx + break_len..]);
                Some(&text[..idx])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

/// Drops everything from the first `#` on
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}
