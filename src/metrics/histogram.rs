use hdrhistogram::Histogram;

/// Latency distribution kept at microsecond resolution.
#[derive(Debug)]
pub struct LatencyHistogram {
    hist: Histogram<u64>,
}

impl LatencyHistogram {
    /// Create a new latency histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram cannot be created.
    pub fn new() -> Result<Self, String> {
        let hist = Histogram::<u64>::new(3)
            .map_err(|err| format!("Failed to create histogram: {}", err))?;
        Ok(Self { hist })
    }

    /// Record a latency value in fractional milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be recorded.
    pub fn record_ms(&mut self, latency_ms: f64) -> Result<(), String> {
        let micros = (latency_ms * 1000.0).round();
        let value = if micros.is_finite() && micros >= 1.0 {
            micros as u64
        } else {
            1
        };
        self.hist
            .record(value)
            .map_err(|err| format!("Failed to record latency: {}", err))
    }

    /// Latency at `quantile` in milliseconds, `0.0` when empty.
    #[must_use]
    pub fn quantile_ms(&self, quantile: f64) -> f64 {
        if self.count() == 0 {
            return 0.0;
        }
        micros_to_ms(self.hist.value_at_quantile(quantile))
    }

    #[must_use]
    pub fn min_ms(&self) -> f64 {
        if self.count() == 0 {
            return 0.0;
        }
        micros_to_ms(self.hist.min())
    }

    #[must_use]
    pub fn max_ms(&self) -> f64 {
        if self.count() == 0 {
            return 0.0;
        }
        micros_to_ms(self.hist.max())
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.hist.len()
    }
}

fn micros_to_ms(micros: u64) -> f64 {
    micros as f64 / 1000.0
}
