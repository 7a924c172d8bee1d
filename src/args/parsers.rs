use std::ffi::OsString;

use super::defaults::SINGLE_DASH_FLAGS;
use super::types::{PositiveU64, PositiveUsize};
use crate::error::ValidationError;

pub(super) fn parse_positive_u64(s: &str) -> Result<PositiveU64, ValidationError> {
    s.parse::<PositiveU64>()
}

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.parse::<PositiveUsize>()
}

/// Rewrites `-?` and the single-dash long flags into the double-dash form
/// clap understands. Everything else passes through untouched.
pub(crate) fn normalize_args<I>(raw_args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    raw_args
        .into_iter()
        .map(|arg| match arg.to_str() {
            Some("-?") => OsString::from("--help"),
            Some(flag) if SINGLE_DASH_FLAGS.contains(&flag) => {
                let mut long = OsString::from("-");
                long.push(flag);
                long
            }
            Some(_) | None => arg,
        })
        .collect()
}
