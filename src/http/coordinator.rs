use std::sync::Arc;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::domain::run::RunConfig;
use crate::error::{AppError, AppResult};
use crate::metrics::{LatencyBuffer, RequestLog, RunSummary, summarize};

use super::partition::assign_work;
use super::session::SessionFactory;
use super::worker::{WorkerReport, WorkerSettings, run_worker};

/// Executes a full run: one session and one task per worker, all joined
/// before the summary is computed.
///
/// # Errors
///
/// Returns an error when a session cannot be built (before any request is
/// sent) or a worker task panics.
pub async fn execute_run<F>(
    config: &RunConfig,
    factory: &F,
    log: Arc<RequestLog>,
) -> AppResult<RunSummary>
where
    F: SessionFactory,
{
    let total_calls = config.total_calls.get();
    let workers = config.workers.get();
    info!(
        "Starting run: {} calls across {} workers against {}",
        total_calls, workers, config.target_url
    );

    let buffer = LatencyBuffer::new(total_calls);

    let mut sessions = Vec::with_capacity(workers);
    for worker in 0..workers {
        sessions.push(factory.create(config, worker).map_err(AppError::http)?);
    }

    let assignments = assign_work(&buffer, config.workers).map_err(AppError::validation)?;
    let settings = WorkerSettings {
        mode: config.response_mode(),
        sleep_time: config.sleep_time,
    };

    let started = Instant::now();
    let mut handles = Vec::with_capacity(workers);
    for (mut session, assignment) in sessions.into_iter().zip(assignments) {
        let log = Arc::clone(&log);
        handles.push(tokio::spawn(async move {
            let report = run_worker(&mut session, assignment, settings, log).await;
            (session, report)
        }));
    }

    let mut finished_sessions = Vec::with_capacity(workers);
    let mut reports: Vec<WorkerReport> = Vec::with_capacity(workers);
    for handle in handles {
        let (session, report) = handle.await?;
        finished_sessions.push(session);
        reports.push(report);
    }
    let elapsed = started.elapsed();
    drop(finished_sessions);
    debug!("All {} workers joined after {:?}", reports.len(), elapsed);

    let failed_calls = reports
        .iter()
        .fold(0usize, |acc, report| acc.saturating_add(report.failures));
    Ok(summarize(&buffer.values(), failed_calls, workers, elapsed))
}
