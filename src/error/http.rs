use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client for worker {worker}: {source}")]
    BuildClientFailed {
        worker: usize,
        #[source]
        source: reqwest::Error,
    },
}

/// Why a single request did not produce a status code. Never fatal to a run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Timeout was reached: {0}")]
    Timeout(String),
    #[error("Couldn't connect to server: {0}")]
    Connect(String),
    #[error("Failed writing received data")]
    WriteAborted,
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let detail = describe_error_chain(&err);
        if err.is_timeout() {
            Self::Timeout(detail)
        } else if err.is_connect() {
            Self::Connect(detail)
        } else {
            Self::Other(detail)
        }
    }
}

fn describe_error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut detail = err.to_string();
    let mut current = err.source();
    while let Some(source) = current {
        let text = source.to_string();
        if !detail.contains(&text) {
            detail.push_str(": ");
            detail.push_str(&text);
        }
        current = source.source();
    }
    detail
}
