use std::path::Path;

use anyhow::Result;
use cc_lab_report::{output, summary};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("summary-report starting...");

    let out_dir = output::ensure_chart_dir(Path::new("."))?;
    let charts = summary::render_all(&out_dir)?;
    info!(
        "Rendered {} charts into {}",
        charts.len(),
        out_dir.display()
    );
    Ok(())
}
