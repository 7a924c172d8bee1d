use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use crate::metrics::{RequestLog, RequestOutcome, RequestRecord, duration_ms};

use super::lifecycle::{ResponseMode, ResponseObserver};
use super::partition::WorkAssignment;
use super::session::HttpSession;
use super::status::status_phrase;

/// Per-run knobs shared by every worker.
#[derive(Debug, Clone, Copy)]
pub struct WorkerSettings {
    pub mode: ResponseMode,
    pub sleep_time: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkerReport {
    pub worker: usize,
    pub calls: usize,
    pub failures: usize,
}

/// Runs one worker's share of the calls, strictly in sequence.
///
/// A failed request is logged and timed like any other; the loop always
/// runs to the end of the assignment.
pub async fn run_worker<S>(
    session: &mut S,
    assignment: WorkAssignment,
    settings: WorkerSettings,
    log: Arc<RequestLog>,
) -> WorkerReport
where
    S: HttpSession + ?Sized,
{
    let WorkAssignment {
        worker,
        calls,
        slots,
    } = assignment;
    debug!(
        "Worker {} starting {} calls at slot {} ({} mode)",
        worker,
        calls,
        slots.start(),
        settings.mode.as_str()
    );

    let mut failures = 0usize;
    for call in 0..calls {
        let mut observer = ResponseObserver::for_mode(settings.mode);

        let started = Instant::now();
        let result = session.perform(&mut observer).await;
        let latency_ms = duration_ms(Instant::now().saturating_duration_since(started));

        let outcome = match result {
            Ok(status) => RequestOutcome::Success {
                status_phrase: status_phrase(i64::from(status)),
            },
            Err(err) => {
                failures = failures.saturating_add(1);
                RequestOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };
        let record = RequestRecord {
            worker,
            call,
            outcome,
            latency_ms,
        };
        if !log.publish(&record, &slots) {
            warn!("Worker {} call {} fell outside its latency window", worker, call);
        }
        drop(observer);

        if !settings.sleep_time.is_zero() {
            sleep(settings.sleep_time).await;
        }
    }

    debug!("Worker {} finished ({} failed)", worker, failures);
    WorkerReport {
        worker,
        calls,
        failures,
    }
}
