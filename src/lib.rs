//! testparams - index the parameters used across a tree of test definitions
//!
//! The extractor walks a directory of test files in two plain-text formats and
//! records, for every configuration key, the files that declare it. Keys are
//! split into two namespaces:
//!
//! - **General**: keys scoped to a whole test file
//! - **Workload**: keys scoped to one embedded workload definition
//!
//! # Example Usage
//!
//! ```no_run
//! use testparams::{extract, OutputFormat, OutputFormatter, TestScanner};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = TestScanner::new("./foundationdb/tests/");
//! let report = extract(&scanner)?;
//!
//! for diag in &report.diagnostics {
//!     println!("skipped: {}", diag);
//! }
//!
//! OutputFormatter::new(OutputFormat::Json)
//!     .write_to(Path::new("test_params.json"), &report.params)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod params;
pub mod parsers;
pub mod scanner;
pub mod util;

pub use cli::output::{OutputFormat, OutputFormatter};
pub use config::{ConfigError, ExtractorConfig};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{ExtractError, OutputError};
pub use extract::{extract, extract_files, ExtractionReport};
pub use params::{Namespace, ParamIndex, TestParams};
pub use parsers::{ParsedFile, TestFormat};
pub use scanner::{ScanConfig, TestScanner};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
