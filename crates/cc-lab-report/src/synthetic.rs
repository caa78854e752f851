use std::path::{Path, PathBuf};

use anyhow::Result;
use cc_lab_abstract::{Condition, Protocol};
use cc_lab_charts::{BarGroup, ScatterPoint, XySeries};
use cc_lab_synth::{generate, summarize, ProtocolPerformance, RttSummary};
use tracing::info;

pub const RTT_COMPARISON_FILE: &str = "rtt_comparison.png";
pub const PERFORMANCE_COMPARISON_FILE: &str = "performance_comparison.png";

/// File name of the per-condition throughput chart.
pub fn throughput_file(condition: Condition) -> String {
    format!("throughput_{}.png", condition.key())
}

/// File name of the per-condition loss chart.
pub fn loss_file(condition: Condition) -> String {
    format!("loss_{}.png", condition.key())
}

pub fn throughput_over_time(out_dir: &Path, condition: Condition) -> Result<PathBuf> {
    let series: Vec<XySeries> = Protocol::ALL
        .iter()
        .map(|&protocol| {
            let trace = generate(condition, protocol);
            XySeries::new(protocol.label(), trace.time, trace.throughput)
        })
        .collect();
    let path = out_dir.join(throughput_file(condition));
    cc_lab_charts::line_chart(
        &series,
        &format!("Throughput over Time ({})", condition.label()),
        "Time (s)",
        "Throughput (Mbps)",
        &path,
    )?;
    Ok(path)
}

pub fn loss_over_time(out_dir: &Path, condition: Condition) -> Result<PathBuf> {
    let series: Vec<XySeries> = Protocol::ALL
        .iter()
        .map(|&protocol| {
            let trace = generate(condition, protocol);
            XySeries::new(protocol.label(), trace.time, trace.loss)
        })
        .collect();
    let path = out_dir.join(loss_file(condition));
    cc_lab_charts::line_chart(
        &series,
        &format!("Packet Loss over Time ({})", condition.label()),
        "Time (s)",
        "Loss Rate (%)",
        &path,
    )?;
    Ok(path)
}

/// RTT summaries for every protocol under one condition, in `Protocol::ALL` order.
pub fn condition_summaries(condition: Condition) -> Result<Vec<RttSummary>> {
    Protocol::ALL
        .iter()
        .map(|&protocol| {
            let summary = summarize(&generate(condition, protocol))?;
            Ok(RttSummary {
                condition,
                protocol,
                avg_rtt: summary.avg_rtt,
                p95_rtt: summary.p95_rtt,
            })
        })
        .collect()
}

/// Grouped bars of average and 95th-percentile RTT per protocol, one pair of
/// groups per condition.
pub fn rtt_comparison(out_dir: &Path) -> Result<PathBuf> {
    let labels: Vec<&str> = Protocol::ALL.iter().map(|p| p.label()).collect();
    let mut groups = Vec::new();
    for condition in Condition::ALL {
        let summaries = condition_summaries(condition)?;
        groups.push(BarGroup::new(
            format!("{} avg", condition.label()),
            summaries.iter().map(|s| s.avg_rtt).collect(),
        ));
        groups.push(BarGroup::new(
            format!("{} p95", condition.label()),
            summaries.iter().map(|s| s.p95_rtt).collect(),
        ));
    }
    let path = out_dir.join(RTT_COMPARISON_FILE);
    cc_lab_charts::grouped_bar_chart(&labels, &groups, "RTT Comparison", "RTT (ms)", &path)?;
    Ok(path)
}

/// Mean operating point per protocol, averaged across both conditions.
pub fn protocol_performance() -> Result<Vec<ProtocolPerformance>> {
    Protocol::ALL
        .iter()
        .map(|&protocol| {
            let mut throughput = 0.0;
            let mut rtt = 0.0;
            for condition in Condition::ALL {
                let summary = summarize(&generate(condition, protocol))?;
                throughput += summary.avg_throughput;
                rtt += summary.avg_rtt;
            }
            let conditions = Condition::ALL.len() as f64;
            Ok(ProtocolPerformance {
                protocol,
                throughput: throughput / conditions,
                rtt: rtt / conditions,
            })
        })
        .collect()
}

/// Scatter of each protocol's operating point, RTT against throughput.
pub fn performance_comparison(out_dir: &Path) -> Result<PathBuf> {
    let points: Vec<ScatterPoint> = protocol_performance()?
        .into_iter()
        .map(|perf| ScatterPoint {
            label: perf.protocol.label().to_string(),
            x: perf.rtt,
            y: perf.throughput,
        })
        .collect();
    let path = out_dir.join(PERFORMANCE_COMPARISON_FILE);
    cc_lab_charts::scatter_chart(
        &points,
        "Protocol Performance",
        "RTT (ms, lower is better)",
        "Throughput (Mbps, higher is better)",
        &path,
    )?;
    Ok(path)
}

/// Renders the complete synthetic-trace chart set into `out_dir`.
pub fn render_all(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut charts = Vec::new();
    for condition in Condition::ALL {
        charts.push(throughput_over_time(out_dir, condition)?);
        charts.push(loss_over_time(out_dir, condition)?);
    }
    charts.push(rtt_comparison(out_dir)?);
    charts.push(performance_comparison(out_dir)?);
    for path in &charts {
        info!("Wrote {}", path.display());
    }
    Ok(charts)
}

/// File names [`render_all`] produces, in render order.
pub fn chart_files() -> Vec<String> {
    let mut files = Vec::new();
    for condition in Condition::ALL {
        files.push(throughput_file(condition));
        files.push(loss_file(condition));
    }
    files.push(RTT_COMPARISON_FILE.to_string());
    files.push(PERFORMANCE_COMPARISON_FILE.to_string());
    files
}
