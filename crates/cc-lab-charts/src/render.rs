use std::path::Path;

use anyhow::{bail, Context, Result};
use plotters::prelude::*;
use tracing::debug;

use crate::series::{BarGroup, ScatterPoint, XySeries};

const LINE_CHART_SIZE: (u32, u32) = (800, 500);
const BAR_CHART_SIZE: (u32, u32) = (600, 400);
const SCATTER_CHART_SIZE: (u32, u32) = (600, 600);

/// Series at or below this length also get per-sample point markers.
const MARKER_POINT_LIMIT: usize = 60;

const PALETTE: [RGBColor; 6] = [RED, BLUE, GREEN, MAGENTA, CYAN, BLACK];

/// Draws one labeled line per series and writes the chart as a PNG.
///
/// Inputs are validated before the backend is created, so a failed call
/// never leaves a partial file behind.
pub fn line_chart(
    series: &[XySeries],
    title: &str,
    x_label: &str,
    y_label: &str,
    out_path: &Path,
) -> Result<()> {
    if series.is_empty() {
        bail!("Chart {:?} has no series", title);
    }
    for s in series {
        if s.x.is_empty() {
            bail!("Chart {:?}: series {:?} is empty", title, s.label);
        }
        if s.x.len() != s.y.len() {
            bail!(
                "Chart {:?}: series {:?} has {} x values but {} y values",
                title,
                s.label,
                s.x.len(),
                s.y.len()
            );
        }
    }

    let x_max = series
        .iter()
        .flat_map(|s| s.x.iter().copied())
        .fold(0.0f64, f64::max)
        .max(1.0);
    let y_max = series
        .iter()
        .flat_map(|s| s.y.iter().copied())
        .fold(0.0f64, f64::max)
        .max(1.0);

    let root = BitMapBackend::new(out_path, LINE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max * 1.1)?;

    chart
        .configure_mesh()
        .axis_desc_style(("sans-serif", 15))
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    for (i, s) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let points: Vec<(f64, f64)> = s.x.iter().copied().zip(s.y.iter().copied()).collect();
        let mut line = LineSeries::new(points, color.stroke_width(2));
        if s.x.len() <= MARKER_POINT_LIMIT {
            line = line.point_size(3);
        }
        chart
            .draw_series(line)?
            .label(s.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("Failed to write chart {}", out_path.display()))?;
    debug!("Rendered line chart {:?} to {}", title, out_path.display());
    Ok(())
}

/// Draws per-category bar clusters, one bar per group, and writes a PNG.
///
/// Every group must carry exactly one value per category. The legend is
/// drawn only when more than one group shares the chart.
pub fn grouped_bar_chart(
    categories: &[&str],
    groups: &[BarGroup],
    title: &str,
    y_label: &str,
    out_path: &Path,
) -> Result<()> {
    if categories.is_empty() {
        bail!("Chart {:?} has no categories", title);
    }
    if groups.is_empty() {
        bail!("Chart {:?} has no bar groups", title);
    }
    for group in groups {
        if group.values.len() != categories.len() {
            bail!(
                "Chart {:?}: group {:?} has {} values for {} categories",
                title,
                group.label,
                group.values.len(),
                categories.len()
            );
        }
    }

    let y_max = groups
        .iter()
        .flat_map(|g| g.values.iter().copied())
        .fold(0.0f64, f64::max)
        .max(1.0);

    let root = BitMapBackend::new(out_path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..categories.len() as f64 - 0.5, 0f64..y_max * 1.15)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .axis_desc_style(("sans-serif", 15))
        .x_labels(categories.len())
        .x_label_formatter(&|x| {
            let nearest = x.round();
            if (x - nearest).abs() > 0.3 {
                return String::new();
            }
            categories
                .get(nearest as usize)
                .map(|c| c.to_string())
                .unwrap_or_default()
        })
        .y_desc(y_label)
        .draw()?;

    // Each category owns [ci - 0.4, ci + 0.4); groups split that span evenly.
    let bar_width = 0.8 / groups.len() as f64;
    for (gi, group) in groups.iter().enumerate() {
        let style = PALETTE[gi % PALETTE.len()].mix(0.8).filled();
        let bars = chart.draw_series(group.values.iter().enumerate().map(|(ci, &value)| {
            let x0 = ci as f64 - 0.4 + gi as f64 * bar_width;
            Rectangle::new([(x0, 0.0), (x0 + bar_width, value)], style)
        }))?;
        if groups.len() > 1 {
            bars.label(group.label.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], style)
            });
        }
    }

    if groups.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()
        .with_context(|| format!("Failed to write chart {}", out_path.display()))?;
    debug!("Rendered bar chart {:?} to {}", title, out_path.display());
    Ok(())
}

/// Draws filled circles with a text annotation next to each point.
pub fn scatter_chart(
    points: &[ScatterPoint],
    title: &str,
    x_label: &str,
    y_label: &str,
    out_path: &Path,
) -> Result<()> {
    if points.is_empty() {
        bail!("Chart {:?} has no points", title);
    }

    let x_min = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let x_pad = ((x_max - x_min) * 0.15).max(1.0);
    let y_pad = ((y_max - y_min) * 0.15).max(1.0);

    let root = BitMapBackend::new(out_path, SCATTER_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min - x_pad..x_max + x_pad, y_min - y_pad..y_max + y_pad)?;

    chart
        .configure_mesh()
        .axis_desc_style(("sans-serif", 15))
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.x, p.y), 5, BLUE.filled())),
    )?;

    let x_nudge = x_pad * 0.2;
    for p in points {
        chart.draw_series(std::iter::once(Text::new(
            p.label.clone(),
            (p.x + x_nudge, p.y),
            ("sans-serif", 15).into_font().color(&BLACK),
        )))?;
    }

    root.present()
        .with_context(|| format!("Failed to write chart {}", out_path.display()))?;
    debug!("Rendered scatter chart {:?} to {}", title, out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{grouped_bar_chart, line_chart, scatter_chart};
    use crate::series::{BarGroup, XySeries};

    fn unused_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        let pid = std::process::id();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock should be monotonic enough for tests")
            .as_nanos();
        p.push(format!("cc-lab-charts-{name}-{pid}-{nanos}.png"));
        p
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let path = unused_path("empty");
        assert!(line_chart(&[], "t", "x", "y", &path).is_err());
        assert!(grouped_bar_chart(&["a"], &[], "t", "y", &path).is_err());
        assert!(grouped_bar_chart(&[], &[BarGroup::new("g", vec![])], "t", "y", &path).is_err());
        assert!(scatter_chart(&[], "t", "x", "y", &path).is_err());
        assert!(!path.exists(), "rejected charts must not touch the filesystem");
    }

    #[test]
    fn ragged_line_series_are_rejected() {
        let path = unused_path("ragged");
        let series = [XySeries::new("a", vec![0.0, 1.0], vec![1.0])];
        let err = line_chart(&series, "t", "x", "y", &path).unwrap_err();
        assert!(err.to_string().contains("2 x values but 1 y values"));
        assert!(!path.exists());
    }

    #[test]
    fn bar_groups_must_cover_every_category() {
        let path = unused_path("short-group");
        let groups = [BarGroup::new("g", vec![1.0, 2.0])];
        let err = grouped_bar_chart(&["a", "b", "c"], &groups, "t", "y", &path).unwrap_err();
        assert!(err.to_string().contains("2 values for 3 categories"));
        assert!(!path.exists());
    }
}
