//! Per-request response observation.
//!
//! A worker hands one [`ResponseObserver`] to its session for every request.
//! In drain mode the observer copies header and body chunks into bounded
//! captures so the session reads the response to the end and can release or
//! reuse the connection. In discard mode nothing is stored: the observer only
//! acknowledges chunk lengths and owns no destination buffers, and the session
//! is built to forbid connection reuse, so each connection lives until the
//! response completes or the timeout expires.

/// Maximum header chunks (lines) kept per request.
pub const MAX_HEADER_CHUNKS: usize = 50;
/// Maximum body chunks kept per request; sized for single-part responses.
pub const MAX_BODY_CHUNKS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Drain,
    Discard,
}

impl ResponseMode {
    #[must_use]
    pub const fn from_keep_connects_open(keep_connects_open: bool) -> Self {
        if keep_connects_open {
            Self::Discard
        } else {
            Self::Drain
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drain => "drain",
            Self::Discard => "discard",
        }
    }
}

/// Receives raw response data as the session reads it.
///
/// Both callbacks return how many bytes were accepted. Accepting fewer than
/// `chunk.len()` tells the session to abort the transfer.
pub trait ResponseSink: Send {
    fn on_header(&mut self, chunk: &[u8]) -> usize;

    fn on_body(&mut self, chunk: &[u8]) -> usize;
}

/// Bounded list of received chunks. Chunks past the limit, or chunks whose
/// copy cannot be allocated, are dropped and counted.
#[derive(Debug)]
pub struct ChunkCapture {
    chunks: Vec<Vec<u8>>,
    max_chunks: usize,
    dropped: usize,
}

impl ChunkCapture {
    #[must_use]
    pub const fn with_limit(max_chunks: usize) -> Self {
        Self {
            chunks: Vec::new(),
            max_chunks,
            dropped: 0,
        }
    }

    /// Stores a copy of `chunk` if there is room. Returns whether it was kept.
    pub fn push(&mut self, chunk: &[u8]) -> bool {
        if self.chunks.len() >= self.max_chunks {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        let mut copy = Vec::new();
        if copy.try_reserve_exact(chunk.len()).is_err() || self.chunks.try_reserve(1).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        copy.extend_from_slice(chunk);
        self.chunks.push(copy);
        true
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    #[must_use]
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.chunks
    }
}

#[derive(Debug)]
pub struct DrainSink {
    headers: ChunkCapture,
    body: ChunkCapture,
}

impl DrainSink {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_limits(MAX_HEADER_CHUNKS, MAX_BODY_CHUNKS)
    }

    #[must_use]
    pub const fn with_limits(max_header_chunks: usize, max_body_chunks: usize) -> Self {
        Self {
            headers: ChunkCapture::with_limit(max_header_chunks),
            body: ChunkCapture::with_limit(max_body_chunks),
        }
    }

    #[must_use]
    pub const fn headers(&self) -> &ChunkCapture {
        &self.headers
    }

    #[must_use]
    pub const fn body(&self) -> &ChunkCapture {
        &self.body
    }
}

impl Default for DrainSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink for DrainSink {
    fn on_header(&mut self, chunk: &[u8]) -> usize {
        self.headers.push(chunk);
        chunk.len()
    }

    fn on_body(&mut self, chunk: &[u8]) -> usize {
        self.body.push(chunk);
        chunk.len()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl ResponseSink for DiscardSink {
    fn on_header(&mut self, chunk: &[u8]) -> usize {
        chunk.len()
    }

    fn on_body(&mut self, chunk: &[u8]) -> usize {
        chunk.len()
    }
}

/// The sink wired into a session for one request.
#[derive(Debug)]
pub enum ResponseObserver {
    Drain(DrainSink),
    Discard(DiscardSink),
}

impl ResponseObserver {
    #[must_use]
    pub const fn for_mode(mode: ResponseMode) -> Self {
        match mode {
            ResponseMode::Drain => Self::Drain(DrainSink::new()),
            ResponseMode::Discard => Self::Discard(DiscardSink),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ResponseMode {
        match self {
            Self::Drain(_) => ResponseMode::Drain,
            Self::Discard(_) => ResponseMode::Discard,
        }
    }
}

impl ResponseSink for ResponseObserver {
    fn on_header(&mut self, chunk: &[u8]) -> usize {
        match self {
            Self::Drain(sink) => sink.on_header(chunk),
            Self::Discard(sink) => sink.on_header(chunk),
        }
    }

    fn on_body(&mut self, chunk: &[u8]) -> usize {
        match self {
            Self::Drain(sink) => sink.on_body(chunk),
            Self::Discard(sink) => sink.on_body(chunk),
        }
    }
}
