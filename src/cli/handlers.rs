use super::commands::CliArgs;
use super::output::{OutputFormat, OutputFormatter};
use crate::config::ExtractorConfig;
use crate::extract::{extract, ExtractionReport};
use crate::scanner::TestScanner;
use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

/// Layers command-line flags over the environment-derived configuration
pub fn resolve_config(args: &CliArgs) -> ExtractorConfig {
    let default_config = ExtractorConfig::default();

    let log_level = if let Some(level) = &args.log_level {
        level.to_lowercase()
    } else if args.verbose {
        "debug".to_string()
    } else if args.quiet {
        "error".to_string()
    } else {
        default_config.log_level.clone()
    };

    let excluded_dirs = if args.exclude.is_empty() {
        default_config.excluded_dirs.clone()
    } else {
        args.exclude.clone()
    };

    ExtractorConfig {
        root: args.root.clone().unwrap_or(default_config.root),
        output: args.output.clone().unwrap_or(default_config.output),
        excluded_dirs,
        log_level,
    }
}

/// Runs one extraction and returns the process exit code
///
/// Parse irregularities are logged but never change the exit code; only
/// I/O failures do.
pub fn handle_extract(config: &ExtractorConfig, format: OutputFormat) -> i32 {
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return 1;
    }
    debug!("Using configuration:\n{}", config);

    match run_extract(config, format) {
        Ok(report) => {
            info!(
                output = %config.output.display(),
                files = report.files_scanned,
                general_params = report.params.all_general_params.len(),
                workload_params = report.params.all_workload_params.len(),
                diagnostics = report.diagnostics.len(),
                "Wrote test parameter index"
            );
            0
        }
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

fn run_extract(config: &ExtractorConfig, format: OutputFormat) -> Result<ExtractionReport> {
    let scanner = TestScanner::new(&config.root).with_config(config.scan_config());
    let report = extract(&scanner).context("Failed to extract test parameters")?;

    for diag in &report.diagnostics {
        warn!(
            path = %diag.path.display(),
            line = diag.line,
            kind = %diag.kind,
            text = %diag.text,
            "Skipped irregular line"
        );
    }
    OutputFormatter::new(format)
        .write_to(&config.output, &report.params)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    Ok(report)
}
