use std::time::Duration;

use crate::args::{CONNECT_TIMEOUT_FACTOR, TesterArgs};
use crate::domain::run::{RunConfig, timeout_from_ms, validate_target_url};
use crate::error::ValidationError;

/// Turns parsed (and config-merged) arguments into a validated run.
///
/// # Errors
///
/// Returns an error when the URL is missing or invalid.
pub(crate) fn to_run_config(args: &TesterArgs) -> Result<RunConfig, ValidationError> {
    let raw_url = args.url.as_deref().ok_or(ValidationError::MissingUrl)?;
    let target_url = validate_target_url(raw_url)?;

    let request_timeout = timeout_from_ms(args.request_timeout_ms);
    let connect_timeout = args.connect_timeout_ms.map_or_else(
        || {
            Duration::from_millis(
                args.request_timeout_ms
                    .get()
                    .saturating_mul(CONNECT_TIMEOUT_FACTOR),
            )
        },
        timeout_from_ms,
    );

    Ok(RunConfig {
        target_url,
        total_calls: args.total_calls,
        workers: args.num_threads,
        sleep_time: Duration::from_millis(args.sleep_time_ms),
        request_timeout,
        connect_timeout,
        reuse_connects: args.reuse_connects,
        keep_connects_open: args.keep_connects_open,
    })
}
