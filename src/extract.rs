//! Folds every collected test file into a single parameter index

use crate::diagnostics::Diagnostic;
use crate::error::ExtractError;
use crate::params::{Namespace, ParamIndex, TestParams};
use crate::parsers::{is_excluded_file, ParsedFile, TestFormat};
use crate::scanner::TestScanner;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of one extraction run
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub params: TestParams,
    pub diagnostics: Vec<Diagnostic>,
    /// Files read and parsed
    pub files_scanned: usize,
    /// Collected files left out on purpose (e.g. `CMakeLists.txt`)
    pub files_skipped: usize,
}

/// Scans the scanner's root and extracts parameters from every test file
pub fn extract(scanner: &TestScanner) -> Result<ExtractionReport, ExtractError> {
    let files = scanner.scan();
    extract_files(&files)
}

/// Extracts parameters from an already collected, ordered list of files
pub fn extract_files(files: &[PathBuf]) -> Result<ExtractionReport, ExtractError> {
    let mut index = ParamIndex::new();
    let mut diagnostics = Vec::new();
    let mut files_scanned = 0;
    let mut files_skipped = 0;

    for path in files {
        let file_name = file_name_of(path);

        let format = match TestFormat::from_file_name(&file_name) {
            Some(format) if !is_excluded_file(&file_name) => format,
            _ => {
                debug!(path = %path.display(), "Skipping non-test file");
                files_skipped += 1;
                continue;
            }
        };

        let content = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.clone(),
            source,
        })?;

        let parsed = format.parse(path, &content);
        debug!(
            path = %path.display(),
            format = %format,
            params = parsed.params.len(),
            diagnostics = parsed.diagnostics.len(),
            "Parsed test file"
        );

        merge(&mut index, &file_name, &parsed);
        diagnostics.extend(parsed.diagnostics);
        files_scanned += 1;
    }

    info!(
        files_scanned,
        files_skipped,
        general_params = index.len(Namespace::General),
        workload_params = index.len(Namespace::Workload),
        diagnostics = diagnostics.len(),
        "Extraction completed"
    );

    Ok(ExtractionReport {
        params: index.finalize(),
        diagnostics,
        files_scanned,
        files_skipped,
    })
}

fn merge(index: &mut ParamIndex, file_name: &str, parsed: &ParsedFile) {
    for (namespace, key) in &parsed.params {
        index.insert(*namespace, key, file_name);
    }
}

/// Final path component, which is what the index records
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
