//! Batch Fetcher: turns a list of shared-drive links and a parallel list of
//! labels into one downloaded image per pair.
//!
//! The external downloader is reached through [`RetrievalTool`] so the batch
//! logic can run against a fake in tests and in the HTTP service tests.

mod batch;
mod outcome;
mod tool;

pub use batch::BatchFetcher;
pub use outcome::DownloadOutcome;
pub use tool::{CommandTool, RetrievalTool};

use crate::config::FetchConfig;
use crate::error::Result;
use std::path::Path;
use std::sync::Arc;

/// Reads a newline-delimited list. Blank lines are kept as entries so that
/// positions in the link and name files stay aligned.
pub fn read_list(path: &Path) -> Result<Vec<String>> {
    let data = std::fs::read_to_string(path)?;
    Ok(data.lines().map(str::to_string).collect())
}

/// Builds the `wget`-style tool described by `cfg`.
pub fn command_tool(cfg: &FetchConfig) -> Arc<dyn RetrievalTool> {
    Arc::new(CommandTool::new(cfg.tool.clone(), cfg.insecure_tls))
}

/// Reads both list files named in `cfg` and runs the batch.
pub fn run_from_lists(
    fetcher: &BatchFetcher,
    cfg: &FetchConfig,
    on_item: impl FnMut(&str, &DownloadOutcome),
) -> Result<Vec<DownloadOutcome>> {
    let links = read_list(&cfg.link_list)?;
    let names = read_list(&cfg.name_list)?;
    fetcher.run_with(&links, &names, on_item)
}
