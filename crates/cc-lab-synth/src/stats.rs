use cc_lab_abstract::{Condition, Protocol, Trace, TraceError};
use serde::Serialize;

/// Aggregate measurements reduced from one trace.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TraceSummary {
    pub avg_throughput: f64,
    pub avg_rtt: f64,
    pub p95_rtt: f64,
}

/// RTT statistics for one protocol/condition pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RttSummary {
    pub condition: Condition,
    pub protocol: Protocol,
    pub avg_rtt: f64,
    pub p95_rtt: f64,
}

/// Mean operating point of one protocol, averaged across conditions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProtocolPerformance {
    pub protocol: Protocol,
    pub throughput: f64,
    pub rtt: f64,
}

/// Reduces a trace to mean throughput, mean RTT and 95th-percentile RTT.
pub fn summarize(trace: &Trace) -> Result<TraceSummary, TraceError> {
    if trace.is_empty() {
        return Err(TraceError::EmptyInput("trace"));
    }
    Ok(TraceSummary {
        avg_throughput: mean(&trace.throughput),
        avg_rtt: mean(&trace.rtt),
        p95_rtt: percentile(&trace.rtt, 95.0),
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Percentile by linear interpolation between neighboring order statistics.
fn percentile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let weight = rank - lo as f64;
    sorted[lo] * (1.0 - weight) + sorted[hi] * weight
}
