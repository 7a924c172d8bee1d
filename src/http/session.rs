use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::{CONNECTION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, Url};
use tracing::debug;

use crate::domain::run::RunConfig;
use crate::error::{HttpError, TransportError};

use super::lifecycle::ResponseSink;

/// Keepalive probe interval used when connection reuse is requested.
const TCP_KEEPALIVE_INTERVAL: Duration = Duration::from_secs(60);

/// One long-lived HTTP client session, owned by exactly one worker.
#[async_trait]
pub trait HttpSession: Send {
    /// Issues one GET against the session target, feeding the response into
    /// `sink`, and returns the HTTP status code.
    async fn perform(&mut self, sink: &mut dyn ResponseSink) -> Result<u16, TransportError>;
}

/// Builds the session a worker will own for the whole run.
pub trait SessionFactory {
    type Session: HttpSession + 'static;

    /// # Errors
    ///
    /// Returns an error when the session cannot be configured.
    fn create(&self, config: &RunConfig, worker: usize) -> Result<Self::Session, HttpError>;
}

#[derive(Debug)]
pub struct ReqwestSession {
    client: Client,
    url: Url,
}

impl ReqwestSession {
    /// Creates a client with the run's timeouts, `Connection` header and
    /// connection reuse hints.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying client cannot be built.
    pub fn new(config: &RunConfig, worker: usize) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONNECTION,
            HeaderValue::from_static(config.connection_header()),
        );

        let mut client_builder = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .danger_accept_invalid_hostnames(true)
            .tcp_keepalive(config.reuse_connects.then_some(TCP_KEEPALIVE_INTERVAL));

        if config.keep_connects_open {
            client_builder = client_builder
                .pool_max_idle_per_host(0)
                .pool_idle_timeout(Some(Duration::from_secs(0)));
        }

        let client = client_builder
            .build()
            .map_err(|err| HttpError::BuildClientFailed {
                worker,
                source: err,
            })?;
        debug!(
            "Worker {} session ready (connection: {}, forbid reuse: {})",
            worker,
            config.connection_header(),
            config.keep_connects_open
        );

        Ok(Self {
            client,
            url: config.target_url.clone(),
        })
    }
}

#[async_trait]
impl HttpSession for ReqwestSession {
    async fn perform(&mut self, sink: &mut dyn ResponseSink) -> Result<u16, TransportError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status().as_u16();
        feed_headers(&response, sink)?;
        feed_body(response, sink).await?;
        Ok(status)
    }
}

fn feed_headers(response: &Response, sink: &mut dyn ResponseSink) -> Result<(), TransportError> {
    let status_line = format!("{:?} {}", response.version(), response.status());
    accept_all(sink.on_header(status_line.as_bytes()), status_line.len())?;
    for (name, value) in response.headers() {
        let mut line = Vec::with_capacity(
            name.as_str()
                .len()
                .saturating_add(value.len())
                .saturating_add(2),
        );
        line.extend_from_slice(name.as_str().as_bytes());
        line.extend_from_slice(b": ");
        line.extend_from_slice(value.as_bytes());
        accept_all(sink.on_header(&line), line.len())?;
    }
    Ok(())
}

async fn feed_body(response: Response, sink: &mut dyn ResponseSink) -> Result<(), TransportError> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        accept_all(sink.on_body(&bytes), bytes.len())?;
    }
    Ok(())
}

const fn accept_all(accepted: usize, expected: usize) -> Result<(), TransportError> {
    if accepted < expected {
        return Err(TransportError::WriteAborted);
    }
    Ok(())
}

/// Production factory: one [`ReqwestSession`] per worker.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReqwestSessionFactory;

impl SessionFactory for ReqwestSessionFactory {
    type Session = ReqwestSession;

    fn create(&self, config: &RunConfig, worker: usize) -> Result<Self::Session, HttpError> {
        ReqwestSession::new(config, worker)
    }
}
