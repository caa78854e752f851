use std::path::{Path, PathBuf};

use anyhow::Result;
use cc_lab_abstract::Protocol;
use cc_lab_charts::{BarGroup, ScatterPoint, XySeries};
use tracing::info;

pub const THROUGHPUT_TIME_FILE: &str = "throughput_time.png";
pub const LOSS_TIME_FILE: &str = "loss_time.png";
pub const RTT_AVG_FILE: &str = "rtt_avg.png";
pub const RTT_95TH_FILE: &str = "rtt_95th.png";
pub const RTT_VS_THROUGHPUT_FILE: &str = "rtt_vs_throughput.png";
pub const LOSS_RATE_FILE: &str = "loss_rate.png";

/// Measurement instants of the fixed ramp-up series, in seconds.
pub const SAMPLE_TIMES: [f64; 7] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0];

/// Headline measurements for one protocol over the full emulation run.
#[derive(Debug, Clone, Copy)]
pub struct ProtocolStats {
    pub avg_throughput: f64,
    pub avg_rtt: f64,
    pub p95_rtt: f64,
    pub loss_rate: f64,
}

/// Fixed comparison table for the given protocol.
pub fn stats(protocol: Protocol) -> ProtocolStats {
    match protocol {
        Protocol::Cubic => ProtocolStats {
            avg_throughput: 8.5,
            avg_rtt: 80.0,
            p95_rtt: 110.0,
            loss_rate: 1.5,
        },
        Protocol::Bbr => ProtocolStats {
            avg_throughput: 9.2,
            avg_rtt: 100.0,
            p95_rtt: 130.0,
            loss_rate: 0.5,
        },
        Protocol::Sprout => ProtocolStats {
            avg_throughput: 6.0,
            avg_rtt: 120.0,
            p95_rtt: 160.0,
            loss_rate: 3.0,
        },
    }
}

/// Throughput ramp-up at [`SAMPLE_TIMES`], in Mbps.
pub fn throughput_curve(protocol: Protocol) -> [f64; 7] {
    match protocol {
        Protocol::Cubic => [1.0, 3.0, 5.0, 6.5, 7.5, 8.0, 8.5],
        Protocol::Bbr => [2.0, 4.5, 6.5, 7.8, 8.8, 9.1, 9.2],
        Protocol::Sprout => [1.0, 2.5, 3.5, 4.2, 5.0, 5.8, 6.0],
    }
}

/// Loss-rate ramp-up at [`SAMPLE_TIMES`], in percent.
pub fn loss_curve(protocol: Protocol) -> [f64; 7] {
    match protocol {
        Protocol::Cubic => [0.5, 0.8, 1.0, 1.3, 1.4, 1.5, 1.5],
        Protocol::Bbr => [0.2, 0.3, 0.4, 0.5, 0.5, 0.5, 0.5],
        Protocol::Sprout => [1.0, 2.0, 2.5, 2.8, 3.0, 3.0, 3.0],
    }
}

pub fn throughput_over_time(out_dir: &Path) -> Result<PathBuf> {
    let series: Vec<XySeries> = Protocol::ALL
        .iter()
        .map(|&protocol| {
            XySeries::new(
                protocol.label(),
                SAMPLE_TIMES.to_vec(),
                throughput_curve(protocol).to_vec(),
            )
        })
        .collect();
    let path = out_dir.join(THROUGHPUT_TIME_FILE);
    cc_lab_charts::line_chart(
        &series,
        "Throughput over Time",
        "Time (s)",
        "Throughput (Mbps)",
        &path,
    )?;
    Ok(path)
}

pub fn loss_over_time(out_dir: &Path) -> Result<PathBuf> {
    let series: Vec<XySeries> = Protocol::ALL
        .iter()
        .map(|&protocol| {
            XySeries::new(
                protocol.label(),
                SAMPLE_TIMES.to_vec(),
                loss_curve(protocol).to_vec(),
            )
        })
        .collect();
    let path = out_dir.join(LOSS_TIME_FILE);
    cc_lab_charts::line_chart(
        &series,
        "Packet Loss over Time",
        "Time (s)",
        "Loss Rate (%)",
        &path,
    )?;
    Ok(path)
}

pub fn average_rtt(out_dir: &Path) -> Result<PathBuf> {
    single_group_bars(
        out_dir,
        RTT_AVG_FILE,
        "Average RTT",
        "RTT (ms)",
        |s| s.avg_rtt,
    )
}

pub fn percentile_rtt(out_dir: &Path) -> Result<PathBuf> {
    single_group_bars(
        out_dir,
        RTT_95TH_FILE,
        "95th Percentile RTT",
        "RTT (ms)",
        |s| s.p95_rtt,
    )
}

pub fn loss_rate(out_dir: &Path) -> Result<PathBuf> {
    single_group_bars(
        out_dir,
        LOSS_RATE_FILE,
        "Packet Loss Rate",
        "Loss Rate (%)",
        |s| s.loss_rate,
    )
}

pub fn rtt_vs_throughput(out_dir: &Path) -> Result<PathBuf> {
    let points: Vec<ScatterPoint> = Protocol::ALL
        .iter()
        .map(|&protocol| {
            let stats = stats(protocol);
            ScatterPoint {
                label: protocol.label().to_string(),
                x: stats.avg_rtt,
                y: stats.avg_throughput,
            }
        })
        .collect();
    let path = out_dir.join(RTT_VS_THROUGHPUT_FILE);
    cc_lab_charts::scatter_chart(
        &points,
        "RTT vs Throughput",
        "RTT (ms, lower is better)",
        "Throughput (Mbps, higher is better)",
        &path,
    )?;
    Ok(path)
}

fn single_group_bars(
    out_dir: &Path,
    file: &str,
    title: &str,
    y_label: &str,
    metric: impl Fn(&ProtocolStats) -> f64,
) -> Result<PathBuf> {
    let labels: Vec<&str> = Protocol::ALL.iter().map(|p| p.label()).collect();
    let groups = [BarGroup::new(
        title,
        Protocol::ALL.iter().map(|&p| metric(&stats(p))).collect(),
    )];
    let path = out_dir.join(file);
    cc_lab_charts::grouped_bar_chart(&labels, &groups, title, y_label, &path)?;
    Ok(path)
}

/// Renders the complete fixed-measurement chart set into `out_dir`.
pub fn render_all(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let charts = vec![
        throughput_over_time(out_dir)?,
        loss_over_time(out_dir)?,
        average_rtt(out_dir)?,
        percentile_rtt(out_dir)?,
        rtt_vs_throughput(out_dir)?,
        loss_rate(out_dir)?,
    ];
    for path in &charts {
        info!("Wrote {}", path.display());
    }
    Ok(charts)
}

/// File names [`render_all`] produces, in render order.
pub fn chart_files() -> [&'static str; 6] {
    [
        THROUGHPUT_TIME_FILE,
        LOSS_TIME_FILE,
        RTT_AVG_FILE,
        RTT_95TH_FILE,
        RTT_VS_THROUGHPUT_FILE,
        LOSS_RATE_FILE,
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{chart_files, loss_curve, stats, throughput_curve};
    use cc_lab_abstract::Protocol;

    #[test]
    fn curves_level_off_at_the_headline_averages() {
        for protocol in Protocol::ALL {
            let stats = stats(protocol);
            assert_eq!(throughput_curve(protocol)[6], stats.avg_throughput);
            assert_eq!(loss_curve(protocol)[6], stats.loss_rate);
        }
    }

    #[test]
    fn p95_rtt_dominates_the_average() {
        for protocol in Protocol::ALL {
            let stats = stats(protocol);
            assert!(stats.p95_rtt > stats.avg_rtt);
        }
    }

    #[test]
    fn chart_files_are_distinct() {
        let files = chart_files();
        let unique: HashSet<_> = files.iter().collect();
        assert_eq!(unique.len(), files.len());
    }
}
