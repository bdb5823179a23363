//! Parser for `.toml` test definitions
//!
//! The file is cut at every `[[test.workload]]` marker. Keys before the first
//! marker are general parameters, keys after it belong to a workload. Trailing
//! `#` comments are ignored.

use super::{split_lines, split_param, strip_comment, ParsedFile, TestFormat};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::params::Namespace;
use std::path::Path;

pub const WORKLOAD_MARKER: &str = "[[test.workload]]";

pub fn parse(path: &Path, content: &str) -> ParsedFile {
    let mut parsed = ParsedFile::new(TestFormat::Toml);
    let mut line_offset = 0;

    for (block_idx, block) in content.split(WORKLOAD_MARKER).enumerate() {
        let namespace = if block_idx == 0 {
            Namespace::General
        } else {
            Namespace::Workload
        };

        parse_block(path, block, line_offset, namespace, &mut parsed);

        // the marker shares its line with the tail of the previous block
        line_offset += split_lines(block).count() - 1;
    }

    parsed
}

fn parse_block(
    path: &Path,
    block: &str,
    line_offset: usize,
    namespace: Namespace,
    parsed: &mut ParsedFile,
) {
    for (idx, raw) in split_lines(block).enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() || !line.contains('=') {
            continue;
        }

        match split_param(line) {
            Ok((key, _)) => parsed.record(namespace, key),
            Err(_) => parsed.diagnostics.push(Diagnostic::new(
                path.to_path_buf(),
                line_offset + idx,
                DiagnosticKind::MalformedParameter,
                line,
            )),
        }
    }
}
