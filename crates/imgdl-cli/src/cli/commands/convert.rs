//! `imgdl convert <file>` – column extraction without the HTTP round trip.

use anyhow::{Context, Result};
use imgdl_core::config::ConvertConfig;
use imgdl_core::convert;
use imgdl_core::server::PROCESSED_FILENAME;
use std::path::{Path, PathBuf};

fn default_output(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(PROCESSED_FILENAME)
}

pub fn run_convert(cfg: &ConvertConfig, input: &Path, out: Option<&Path>) -> Result<()> {
    let output = out.map(Path::to_path_buf).unwrap_or_else(|| default_output(input));
    let table = convert::convert_file(input, &cfg.columns, &cfg.allowed_extensions, &output)
        .with_context(|| format!("convert {}", input.display()))?;
    println!("Wrote {} rows to {}", table.rows.len(), output.display());
    Ok(())
}
