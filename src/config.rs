//! Configuration management for testparams
//!
//! Settings are loaded from environment variables with defaults and can be
//! overridden by command-line flags before being validated.
//!
//! # Environment Variables
//!
//! - `TESTPARAMS_ROOT`: Directory to scan - default: "./foundationdb/tests/"
//! - `TESTPARAMS_OUTPUT`: Output file - default: "test_params.json"
//! - `TESTPARAMS_EXCLUDE`: Comma-separated directory substrings to skip -
//!   default: "status,TestRunner,authorization"
//! - `TESTPARAMS_LOG_LEVEL`: Logging level - default: "info"

use crate::scanner::{ScanConfig, DEFAULT_EXCLUDED_DIRS};
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_ROOT: &str = "./foundationdb/tests/";
pub const DEFAULT_OUTPUT: &str = "test_params.json";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Root of the test tree
    pub root: PathBuf,

    /// Where the parameter index is written
    pub output: PathBuf,

    /// Directory path substrings that are never descended into
    pub excluded_dirs: Vec<String>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ExtractorConfig {
    /// Loads from `TESTPARAMS_*` environment variables, falling back to defaults
    fn default() -> Self {
        let root = env::var("TESTPARAMS_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ROOT));

        let output = env::var("TESTPARAMS_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT));

        let excluded_dirs = env::var("TESTPARAMS_EXCLUDE")
            .map(|v| parse_exclude_list(&v))
            .unwrap_or_else(|_| DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect());

        let log_level = env::var("TESTPARAMS_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            root,
            output,
            excluded_dirs,
            log_level,
        }
    }
}

impl ExtractorConfig {
    /// Checks that the output path is set, exclusions are non-empty strings
    /// and the log level is known
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output path must not be empty".to_string(),
            ));
        }

        if let Some(idx) = self.excluded_dirs.iter().position(|s| s.is_empty()) {
            return Err(ConfigError::ParseError {
                field: "excluded_dirs".to_string(),
                error: format!("entry {} is empty", idx),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            excluded_dirs: self.excluded_dirs.clone(),
        }
    }
}

impl fmt::Display for ExtractorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Testparams Configuration:")?;
        writeln!(f, "  Root: {}", self.root.display())?;
        writeln!(f, "  Output: {}", self.output.display())?;
        writeln!(f, "  Excluded Dirs: {}", self.excluded_dirs.join(", "))?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

/// Comma-separated list; surrounding whitespace is trimmed
fn parse_exclude_list(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    fn valid_config() -> ExtractorConfig {
        ExtractorConfig {
            root: PathBuf::from("tests"),
            output: PathBuf::from("out.json"),
            excluded_dirs: vec!["status".to_string()],
            log_level: "info".to_string(),
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = vec![
            EnvGuard::unset("TESTPARAMS_ROOT"),
            EnvGuard::unset("TESTPARAMS_OUTPUT"),
            EnvGuard::unset("TESTPARAMS_EXCLUDE"),
            EnvGuard::unset("TESTPARAMS_LOG_LEVEL"),
        ];

        let config = ExtractorConfig::default();

        assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.excluded_dirs, vec!["status", "TestRunner", "authorization"]);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("TESTPARAMS_ROOT", "/srv/fdb/tests"),
            EnvGuard::set("TESTPARAMS_OUTPUT", "/tmp/params.json"),
            EnvGuard::set("TESTPARAMS_EXCLUDE", "status, restarting ,TestRunner"),
            EnvGuard::set("TESTPARAMS_LOG_LEVEL", "DEBUG"),
        ];

        let config = ExtractorConfig::default();

        assert_eq!(config.root, PathBuf::from("/srv/fdb/tests"));
        assert_eq!(config.output, PathBuf::from("/tmp/params.json"));
        assert_eq!(config.excluded_dirs, vec!["status", "restarting", "TestRunner"]);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_validation_valid() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_output() {
        let mut config = valid_config();
        config.output = PathBuf::new();
        assert!(matches!(config.validate(), Err(ConfigError::ValidationFailed(_))));
    }

    #[test]
    fn test_validation_empty_exclusion() {
        let mut config = valid_config();
        config.excluded_dirs = vec!["status".to_string(), String::new()];
        assert!(matches!(config.validate(), Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut config = valid_config();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_scan_config_carries_exclusions() {
        let config = valid_config();
        assert_eq!(config.scan_config().excluded_dirs, vec!["status"]);
    }

    #[test]
    fn test_config_display() {
        let display = format!("{}", valid_config());
        assert!(display.contains("Testparams Configuration:"));
        assert!(display.contains("Excluded Dirs: status"));
    }
}
