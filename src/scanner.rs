use crate::parsers::TestFormat;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Directories whose path contains any of these is never descended into
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["status", "TestRunner", "authorization"];

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Substrings matched against the full directory path, not path segments
    pub excluded_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Collects test-definition files below a root directory
pub struct TestScanner {
    root: PathBuf,
    config: ScanConfig,
}

impl TestScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns every `.txt`/`.toml` file under the root, sorted by path
    ///
    /// A missing or unreadable root yields an empty list.
    pub fn scan(&self) -> Vec<PathBuf> {
        let start = Instant::now();

        info!(
            root = %self.root.display(),
            excluded = ?self.config.excluded_dirs,
            "Starting test scan"
        );

        if !self.root.is_dir() {
            debug!(root = %self.root.display(), "Root is not a readable directory");
            return Vec::new();
        }
        if is_excluded_path(&self.root, &self.config.excluded_dirs) {
            debug!(root = %self.root.display(), "Root itself matches an exclusion");
            return Vec::new();
        }

        let excluded = self.config.excluded_dirs.clone();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir && is_excluded_path(entry.path(), &excluded))
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let is_test_file = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(TestFormat::from_file_name)
                .is_some();
            if is_test_file {
                files.push(entry.into_path());
            }
        }

        files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

        info!(
            files_found = files.len(),
            scan_time_ms = start.elapsed().as_millis() as u64,
            "Test scan completed"
        );

        files
    }
}

/// Literal substring test against the whole path
pub fn is_excluded_path(path: &Path, excluded: &[String]) -> bool {
    let path = path.to_string_lossy();
    excluded.iter().any(|needle| path.contains(needle.as_str()))
}
