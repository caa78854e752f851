use std::path::Path;

use anyhow::Result;
use cc_lab_report::{output, synthetic};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("trace-report starting...");

    let out_dir = output::ensure_chart_dir(Path::new("."))?;
    let charts = synthetic::render_all(&out_dir)?;
    info!(
        "Rendered {} charts into {}",
        charts.len(),
        out_dir.display()
    );
    Ok(())
}
