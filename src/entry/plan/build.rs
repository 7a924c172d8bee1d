use clap::ArgMatches;
use tracing::debug;

use crate::adapters::cli::mapper::to_run_config;
use crate::args::TesterArgs;
use crate::config::{apply_config, load_config};
use crate::domain::run::RunConfig;
use crate::error::{AppError, AppResult};

/// Merges any config file into the CLI arguments and validates the result.
pub(crate) fn build_plan(args: &mut TesterArgs, matches: &ArgMatches) -> AppResult<RunConfig> {
    if let Some(config) = load_config(args.config.as_deref())? {
        debug!("Applying config file values");
        apply_config(args, matches, &config)?;
    }
    to_run_config(args).map_err(AppError::validation)
}
