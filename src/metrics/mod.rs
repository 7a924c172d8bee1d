//! Latency storage, per-request log output, and run aggregation.
mod buffer;
mod histogram;
mod request_log;
mod summary;

pub use buffer::{LatencyBuffer, LatencySlots};
pub use histogram::LatencyHistogram;
pub use request_log::{RequestLog, RequestOutcome, RequestRecord};
pub use summary::{LatencyPercentiles, RunSummary, duration_ms, summarize};
