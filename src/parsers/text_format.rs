//! Parser for `.txt` test definitions
//!
//! ```text
//! testTitle=AsyncFileCorrectnessTest
//! general_param1 = xx
//!
//!     testName=AsyncFileCorrectness
//!     workload_param = xx
//! ```
//!
//! The first line names the test. Every later `key=value` line is a general
//! parameter, unless it is indented, in which case it belongs to a workload.

use super::{split_lines, split_param, ParsedFile, TestFormat};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::params::Namespace;
use std::path::Path;
use tracing::debug;

pub fn parse(path: &Path, content: &str) -> ParsedFile {
    let mut parsed = ParsedFile::new(TestFormat::Text);
    let mut lines = split_lines(content).enumerate();

    // an empty file still yields one empty header line
    let header = lines.next().map_or("", |(_, line)| line);
    match split_param(header) {
        Ok((_, title)) => {
            debug!(path = %path.display(), title, "Parsed test title");
            parsed.title = Some(title.to_string());
        }
        Err(_) => parsed.diagnostics.push(Diagnostic::new(
            path.to_path_buf(),
            0,
            DiagnosticKind::MalformedHeader,
            header,
        )),
    }

    for (idx, line) in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || !trimmed.contains('=') {
            continue;
        }

        let namespace = if line.starts_with(|c: char| c == ' ' || c == '\t') {
            Namespace::Workload
        } else {
            Namespace::General
        };

        match split_param(trimmed) {
            Ok((key, _)) => parsed.record(namespace, key),
            Err(_) => {
                // rest of the file is no longer trusted
                parsed.diagnostics.push(Diagnostic::new(
                    path.to_path_buf(),
                    idx,
                    DiagnosticKind::MalformedParameter,
                    trimmed,
                ));
                break;
            }
        }
    }

    parsed
}
