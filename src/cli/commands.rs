use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Index the configuration parameters used across a tree of test files
#[derive(Parser, Debug)]
#[command(
    name = "testparams",
    about = "Index the configuration parameters used across a tree of test files",
    version,
    long_about = "testparams walks a directory of .txt and .toml test definitions and \
                  records, for every general and workload parameter, which files declare it. \
                  The result is written to test_params.json.\n\n\
                  Examples:\n  \
                  testparams\n  \
                  testparams ./foundationdb/tests/\n  \
                  testparams tests/ --output params.yaml --format yaml"
)]
pub struct CliArgs {
    #[arg(
        value_name = "ROOT",
        help = "Directory containing the test files (defaults to ./foundationdb/tests/)"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the index to FILE instead of test_params.json"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "json",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long = "exclude",
        value_name = "SUBSTRING",
        help = "Skip directories whose path contains SUBSTRING (repeatable, replaces the defaults)"
    )]
    pub exclude: Vec<String>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Log every parsed file")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}
