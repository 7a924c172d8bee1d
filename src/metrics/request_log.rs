use std::io::Write;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use super::buffer::LatencySlots;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    Success { status_phrase: String },
    Failed { reason: String },
}

/// One finished request, ready to be printed.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRecord {
    pub worker: usize,
    pub call: usize,
    pub outcome: RequestOutcome,
    pub latency_ms: f64,
}

impl RequestRecord {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, RequestOutcome::Success { .. })
    }

    #[must_use]
    pub fn line(&self) -> String {
        match &self.outcome {
            RequestOutcome::Success { status_phrase } => format!(
                "Worker {:>2}.{:<6} - Success: {} - Response time: {:.2} ms",
                self.worker, self.call, status_phrase, self.latency_ms
            ),
            RequestOutcome::Failed { reason } => format!(
                "Worker {:>2}.{:<6} - Request failed: {} - Response time: {:.2} ms",
                self.worker, self.call, reason, self.latency_ms
            ),
        }
    }
}

#[derive(Debug)]
enum LogTarget {
    Console,
    Memory(Vec<String>),
}

/// Shared per-request output channel.
///
/// Every worker holds a handle to the same log. A single lock serializes
/// output so lines never interleave; it is held only while one line is
/// written and its latency slot is stored, never across network I/O.
#[derive(Debug)]
pub struct RequestLog {
    target: Mutex<LogTarget>,
}

impl RequestLog {
    /// Successes go to stdout, failures to stderr.
    #[must_use]
    pub const fn console() -> Self {
        Self {
            target: Mutex::new(LogTarget::Console),
        }
    }

    /// Keeps lines in memory; used by tests and embedders.
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            target: Mutex::new(LogTarget::Memory(Vec::new())),
        }
    }

    /// Emits the record's line and stores its latency in `slots` under one
    /// lock acquisition. Returns whether the slot write landed.
    pub fn publish(&self, record: &RequestRecord, slots: &LatencySlots) -> bool {
        let line = record.line();
        let mut target = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        match &mut *target {
            LogTarget::Console => {
                if record.is_success() {
                    write_line(&mut std::io::stdout().lock(), &line);
                } else {
                    write_line(&mut std::io::stderr().lock(), &line);
                }
            }
            LogTarget::Memory(lines) => lines.push(line),
        }
        slots.record(record.call, record.latency_ms)
    }

    /// Lines captured so far. Always empty for the console target.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let target = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        match &*target {
            LogTarget::Console => Vec::new(),
            LogTarget::Memory(lines) => lines.clone(),
        }
    }
}

/// Writes one line; a failed write is reported to diagnostics and the
/// record is still counted.
fn write_line<W: Write>(out: &mut W, line: &str) -> bool {
    match writeln!(out, "{}", line) {
        Ok(()) => true,
        Err(err) => {
            debug!("Request log write failed: {}", err);
            false
        }
    }
}
