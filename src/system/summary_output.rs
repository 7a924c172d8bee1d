use crate::metrics::RunSummary;

pub(crate) fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Total worker count: {}", summary.workers),
        format!("Total test time: {:.2} s", summary.elapsed_secs()),
        format!("Average response time: {:.2} ms", summary.average_latency_ms),
        format!(
            "Average requests per second: {:.2}",
            summary.throughput_per_sec
        ),
        format!(
            "Calls: {} total, {} succeeded, {} failed",
            summary.total_calls,
            summary.successful_calls(),
            summary.failed_calls
        ),
    ];
    if let Some(percentiles) = summary.percentiles {
        lines.push(format!(
            "Response time (ms): min {:.2} | p50 {:.2} | p90 {:.2} | p99 {:.2} | max {:.2}",
            percentiles.min_ms,
            percentiles.p50_ms,
            percentiles.p90_ms,
            percentiles.p99_ms,
            percentiles.max_ms
        ));
    }
    lines
}

pub(crate) fn print_summary(summary: &RunSummary) {
    for line in summary_lines(summary) {
        println!("{}", line);
    }
    println!("All workers have finished.");
}
