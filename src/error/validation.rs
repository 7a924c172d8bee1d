use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("No URL provided (pass it as the first argument or set url in config).")]
    MissingUrl,
    #[error("\"{url}\" is not a valid URL")]
    UrlSchemePrefix { url: String },
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Results buffer holds {total} slots, cannot hand out {start}..{end}.")]
    SlotRangeOutOfBounds {
        start: usize,
        end: usize,
        total: usize,
    },
}
