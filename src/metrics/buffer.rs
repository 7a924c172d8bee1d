use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ValidationError;

/// One latency slot per call of the run, stored as `f64` bit patterns.
///
/// Slots start at `0.0`. Workers receive disjoint [`LatencySlots`] views and
/// never contend on the same slot, so stores are relaxed; the coordinator
/// reads the values only after joining every worker.
#[derive(Debug, Clone)]
pub struct LatencyBuffer {
    slots: Arc<[AtomicU64]>,
}

impl LatencyBuffer {
    #[must_use]
    pub fn new(len: usize) -> Self {
        let slots: Arc<[AtomicU64]> = (0..len).map(|_| AtomicU64::new(0)).collect();
        Self { slots }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Hands out the view `start..start + len`.
    ///
    /// # Errors
    ///
    /// Returns an error when the range does not fit inside the buffer.
    pub fn slots(&self, start: usize, len: usize) -> Result<LatencySlots, ValidationError> {
        let end = start.checked_add(len).unwrap_or(usize::MAX);
        if end > self.slots.len() {
            return Err(ValidationError::SlotRangeOutOfBounds {
                start,
                end,
                total: self.slots.len(),
            });
        }
        Ok(LatencySlots {
            slots: Arc::clone(&self.slots),
            start,
            len,
        })
    }

    /// Snapshot of every slot in global call order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.slots
            .iter()
            .map(|slot| f64::from_bits(slot.load(Ordering::Acquire)))
            .collect()
    }
}

/// A worker's private window into the [`LatencyBuffer`].
#[derive(Debug)]
pub struct LatencySlots {
    slots: Arc<[AtomicU64]>,
    start: usize,
    len: usize,
}

impl LatencySlots {
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `latency_ms` at `local_index` within this window. Returns
    /// `false` when the index falls outside the window.
    pub fn record(&self, local_index: usize, latency_ms: f64) -> bool {
        if local_index >= self.len {
            return false;
        }
        let Some(slot) = self
            .start
            .checked_add(local_index)
            .and_then(|index| self.slots.get(index))
        else {
            return false;
        };
        slot.store(latency_ms.to_bits(), Ordering::Relaxed);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_write_into_their_own_window() -> Result<(), String> {
        let buffer = LatencyBuffer::new(5);
        let first = buffer.slots(0, 2).map_err(|err| err.to_string())?;
        let second = buffer.slots(2, 3).map_err(|err| err.to_string())?;

        let writes = [
            first.record(0, 1.5),
            first.record(1, 2.5),
            second.record(0, 3.5),
            second.record(2, 4.5),
        ];
        if writes.contains(&false) {
            return Err(format!("Unexpected write results: {:?}", writes));
        }

        let values = buffer.values();
        if values != [1.5, 2.5, 3.5, 0.0, 4.5] {
            return Err(format!("Unexpected values: {:?}", values));
        }
        Ok(())
    }

    #[test]
    fn record_rejects_index_outside_window() -> Result<(), String> {
        let buffer = LatencyBuffer::new(4);
        let window = buffer.slots(1, 2).map_err(|err| err.to_string())?;
        if window.record(2, 9.0) {
            return Err("Expected out-of-window write to be rejected".to_owned());
        }
        if buffer.values().iter().any(|value| value.to_bits() != 0) {
            return Err("Buffer must stay untouched".to_owned());
        }
        Ok(())
    }

    #[test]
    fn slots_reject_range_past_end() -> Result<(), String> {
        let buffer = LatencyBuffer::new(3);
        match buffer.slots(2, 2) {
            Err(ValidationError::SlotRangeOutOfBounds { start, end, total })
                if (start, end, total) == (2, 4, 3) =>
            {
                Ok(())
            }
            other => Err(format!("Unexpected result: {:?}", other)),
        }
    }

    #[test]
    fn empty_window_is_allowed() -> Result<(), String> {
        let buffer = LatencyBuffer::new(3);
        let window = buffer.slots(3, 0).map_err(|err| err.to_string())?;
        if !window.is_empty() || window.record(0, 1.0) {
            return Err("Empty window must not accept writes".to_owned());
        }
        Ok(())
    }
}
