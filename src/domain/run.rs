use std::time::Duration;

use url::Url;

use crate::args::{PositiveU64, PositiveUsize};
use crate::error::ValidationError;
use crate::http::ResponseMode;

/// Immutable description of one load run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target_url: Url,
    pub total_calls: PositiveUsize,
    pub workers: PositiveUsize,
    pub sleep_time: Duration,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub reuse_connects: bool,
    pub keep_connects_open: bool,
}

impl RunConfig {
    #[must_use]
    pub const fn response_mode(&self) -> ResponseMode {
        ResponseMode::from_keep_connects_open(self.keep_connects_open)
    }

    #[must_use]
    pub const fn connection_header(&self) -> &'static str {
        if self.reuse_connects {
            "keep-alive"
        } else {
            "close"
        }
    }
}

/// Checks the literal `http` prefix first, then that the value is an
/// absolute URL the client can use.
///
/// # Errors
///
/// Returns an error when the prefix is missing or the URL does not parse.
pub fn validate_target_url(raw: &str) -> Result<Url, ValidationError> {
    if !raw.starts_with("http") {
        return Err(ValidationError::UrlSchemePrefix {
            url: raw.to_owned(),
        });
    }
    Url::parse(raw).map_err(|err| ValidationError::InvalidUrl {
        url: raw.to_owned(),
        source: err,
    })
}

pub fn timeout_from_ms(ms: PositiveU64) -> Duration {
    Duration::from_millis(ms.get())
}
