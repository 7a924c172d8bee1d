use crate::args::PositiveUsize;
use crate::error::ValidationError;
use crate::metrics::{LatencyBuffer, LatencySlots};

/// Calls per worker: `total / workers` each, plus one extra for the first
/// `total % workers` workers.
#[must_use]
pub fn partition_calls(total_calls: usize, workers: PositiveUsize) -> Vec<usize> {
    let workers = workers.get();
    let base = total_calls.checked_div(workers).unwrap_or(0);
    let remainder = total_calls.checked_rem(workers).unwrap_or(0);
    (0..workers)
        .map(|worker| {
            if worker < remainder {
                base.saturating_add(1)
            } else {
                base
            }
        })
        .collect()
}

/// Work handed to one worker: how many calls it makes and where it stores
/// their latencies.
#[derive(Debug)]
pub struct WorkAssignment {
    pub worker: usize,
    pub calls: usize,
    pub slots: LatencySlots,
}

/// Splits the whole buffer into contiguous, non-overlapping windows, one per
/// worker, sized by [`partition_calls`].
///
/// # Errors
///
/// Returns an error if a window would fall outside the buffer.
pub fn assign_work(
    buffer: &LatencyBuffer,
    workers: PositiveUsize,
) -> Result<Vec<WorkAssignment>, ValidationError> {
    let mut offset = 0usize;
    partition_calls(buffer.len(), workers)
        .into_iter()
        .enumerate()
        .map(|(worker, calls)| {
            let slots = buffer.slots(offset, calls)?;
            offset = offset.saturating_add(calls);
            Ok(WorkAssignment {
                worker,
                calls,
                slots,
            })
        })
        .collect()
}
