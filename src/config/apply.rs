use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU64, PositiveUsize, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given explicitly on
/// the command line are left alone.
///
/// # Errors
///
/// Returns an error when a numeric config value is not positive.
pub fn apply_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "total_calls")
        && let Some(total_calls) = config.total_calls
    {
        args.total_calls = ensure_positive_usize(total_calls, "total_calls")?;
    }

    if !is_cli(matches, "num_threads")
        && let Some(num_threads) = config.num_threads
    {
        args.num_threads = ensure_positive_usize(num_threads, "num_threads")?;
    }

    if !is_cli(matches, "sleep_time_ms")
        && let Some(sleep_time) = config.sleep_time
    {
        args.sleep_time_ms = sleep_time;
    }

    if !is_cli(matches, "request_timeout_ms")
        && let Some(timeout) = config.request_timeout
    {
        args.request_timeout_ms = ensure_positive_u64(timeout, "request_timeout")?;
    }

    if !is_cli(matches, "connect_timeout_ms")
        && let Some(timeout) = config.connect_timeout
    {
        args.connect_timeout_ms = Some(ensure_positive_u64(timeout, "connect_timeout")?);
    }

    if !is_cli(matches, "reuse_connects")
        && let Some(reuse) = config.reuse_connects
    {
        args.reuse_connects = reuse;
    }

    if !is_cli(matches, "keep_connects_open")
        && let Some(keep_open) = config.keep_connects_open
    {
        args.keep_connects_open = keep_open;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}
