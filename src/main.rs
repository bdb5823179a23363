use testparams::cli::commands::CliArgs;
use testparams::cli::handlers::{handle_extract, resolve_config};
use testparams::util::logging::{self, parse_level};
use testparams::{ExtractorConfig, NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    let config = resolve_config(&args);
    init_logging_from_config(&config);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_extract(&config, args.format.into());

    process::exit(exit_code);
}

fn init_logging_from_config(config: &ExtractorConfig) {
    let logging_config = logging::LoggingConfig {
        level: parse_level(&config.log_level),
        ..logging::config_from_env()
    };

    logging::init_logging(logging_config);
}
