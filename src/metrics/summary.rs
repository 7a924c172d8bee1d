use std::time::Duration;

use tracing::warn;

use super::histogram::LatencyHistogram;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatencyPercentiles {
    pub min_ms: f64,
    pub p50_ms: f64,
    pub p90_ms: f64,
    pub p99_ms: f64,
    pub max_ms: f64,
}

/// Aggregate view of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub workers: usize,
    pub total_calls: usize,
    pub failed_calls: usize,
    pub elapsed: Duration,
    pub average_latency_ms: f64,
    pub throughput_per_sec: f64,
    pub percentiles: Option<LatencyPercentiles>,
}

impl RunSummary {
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        duration_ms(self.elapsed) / 1000.0
    }

    #[must_use]
    pub const fn successful_calls(&self) -> usize {
        self.total_calls.saturating_sub(self.failed_calls)
    }
}

/// Converts a duration to fractional milliseconds without losing
/// sub-millisecond precision.
#[must_use]
pub fn duration_ms(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Builds the run summary from every latency slot. Failed calls count
/// toward the average like any other call.
#[must_use]
pub fn summarize(
    latencies: &[f64],
    failed_calls: usize,
    workers: usize,
    elapsed: Duration,
) -> RunSummary {
    let total_calls = latencies.len();
    let total_latency: f64 = latencies.iter().sum();
    let average_latency_ms = if total_calls == 0 {
        0.0
    } else {
        total_latency / total_calls as f64
    };

    let elapsed_secs = duration_ms(elapsed) / 1000.0;
    let throughput_per_sec = if elapsed_secs > 0.0 {
        total_calls as f64 / elapsed_secs
    } else {
        0.0
    };

    RunSummary {
        workers,
        total_calls,
        failed_calls,
        elapsed,
        average_latency_ms,
        throughput_per_sec,
        percentiles: percentiles(latencies),
    }
}

fn percentiles(latencies: &[f64]) -> Option<LatencyPercentiles> {
    let mut histogram = match LatencyHistogram::new() {
        Ok(histogram) => histogram,
        Err(err) => {
            warn!("{}", err);
            return None;
        }
    };
    for latency in latencies {
        if let Err(err) = histogram.record_ms(*latency) {
            warn!("{}", err);
            return None;
        }
    }
    Some(LatencyPercentiles {
        min_ms: histogram.min_ms(),
        p50_ms: histogram.quantile_ms(0.5),
        p90_ms: histogram.quantile_ms(0.9),
        p99_ms: histogram.quantile_ms(0.99),
        max_ms: histogram.max_ms(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn duration_ms_keeps_sub_millisecond_precision() -> Result<(), String> {
        let value = duration_ms(Duration::from_micros(1_250));
        if !close(value, 1.25) {
            return Err(format!("Unexpected value: {}", value));
        }
        if duration_ms(Duration::from_micros(1_251)) <= value {
            return Err("Longer durations must map to larger values".to_owned());
        }
        Ok(())
    }

    #[test]
    fn summarize_averages_all_slots() -> Result<(), String> {
        let summary = summarize(&[10.0, 20.0, 30.0, 40.0], 1, 2, Duration::from_secs(2));
        if !close(summary.average_latency_ms, 25.0) {
            return Err(format!("Unexpected average: {}", summary.average_latency_ms));
        }
        if !close(summary.throughput_per_sec, 2.0) {
            return Err(format!(
                "Unexpected throughput: {}",
                summary.throughput_per_sec
            ));
        }
        if summary.successful_calls() != 3 || summary.workers != 2 {
            return Err("Unexpected counts".to_owned());
        }
        Ok(())
    }

    #[test]
    fn summarize_reports_percentiles() -> Result<(), String> {
        let latencies: Vec<f64> = (1..=100).map(f64::from).collect();
        let summary = summarize(&latencies, 0, 4, Duration::from_secs(1));
        let Some(percentiles) = summary.percentiles else {
            return Err("Expected percentiles".to_owned());
        };
        if !close(percentiles.min_ms, 1.0) {
            return Err(format!("Unexpected min: {}", percentiles.min_ms));
        }
        if (percentiles.p50_ms - 50.0).abs() > 0.1 || (percentiles.p99_ms - 99.0).abs() > 0.1 {
            return Err(format!("Unexpected percentiles: {:?}", percentiles));
        }
        if (percentiles.max_ms - 100.0).abs() > 0.1 {
            return Err(format!("Unexpected max: {}", percentiles.max_ms));
        }
        Ok(())
    }

    #[test]
    fn zero_elapsed_time_reports_zero_throughput() -> Result<(), String> {
        let summary = summarize(&[1.0], 0, 1, Duration::ZERO);
        if summary.throughput_per_sec.to_bits() != 0.0_f64.to_bits() {
            return Err(format!(
                "Unexpected throughput: {}",
                summary.throughput_per_sec
            ));
        }
        Ok(())
    }
}
