use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Directory charts are written into, relative to the invocation directory.
pub const CHART_DIR: &str = "graphs";

/// Creates the chart directory under `root` if needed and returns its path.
pub fn ensure_chart_dir(root: &Path) -> Result<PathBuf> {
    let dir = root.join(CHART_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create chart directory {}", dir.display()))?;
    Ok(dir)
}
