//! Sequential batch run over link/label pairs.

use super::outcome::DownloadOutcome;
use super::tool::RetrievalTool;
use crate::error::{ImgdlError, Result};
use crate::naming::{resolve_reference, sanitize_label};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Downloads one file per link/label pair into `download_dir`.
///
/// Pairs are processed strictly in order, one external process at a time. A
/// failed pair is recorded and the batch moves on; files written by earlier
/// pairs are left in place. Two pairs whose labels sanitize to the same name
/// write the same file and the later one wins.
#[derive(Clone)]
pub struct BatchFetcher {
    tool: Arc<dyn RetrievalTool>,
    download_dir: PathBuf,
    extension: String,
}

impl BatchFetcher {
    pub fn new(
        tool: Arc<dyn RetrievalTool>,
        download_dir: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            tool,
            download_dir: download_dir.into(),
            extension: extension.into(),
        }
    }

    /// Destination path for a sanitized name.
    pub fn dest_path(&self, name: &str) -> PathBuf {
        self.download_dir.join(format!("{name}.{}", self.extension))
    }

    /// Runs the batch and returns one outcome per pair, in input order.
    pub fn run(&self, references: &[String], labels: &[String]) -> Result<Vec<DownloadOutcome>> {
        self.run_with(references, labels, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `on_item(reference, outcome)` after each pair.
    ///
    /// Fails with `CountMismatch` before touching the filesystem when the
    /// lists differ in length.
    pub fn run_with<F>(
        &self,
        references: &[String],
        labels: &[String],
        mut on_item: F,
    ) -> Result<Vec<DownloadOutcome>>
    where
        F: FnMut(&str, &DownloadOutcome),
    {
        if references.len() != labels.len() {
            tracing::warn!(
                links = references.len(),
                names = labels.len(),
                "link/name count mismatch; batch refused"
            );
            return Err(ImgdlError::CountMismatch {
                links: references.len(),
                names: labels.len(),
            });
        }

        tracing::info!(items = references.len(), dir = %self.download_dir.display(), "batch started");
        let mut outcomes = Vec::with_capacity(references.len());
        for (reference, label) in references.iter().zip(labels) {
            let outcome = self.fetch_one(reference, label);
            on_item(reference, &outcome);
            outcomes.push(outcome);
        }

        let ok = outcomes.iter().filter(|o| o.is_success()).count();
        tracing::info!(ok, failed = outcomes.len() - ok, "batch finished");
        Ok(outcomes)
    }

    /// Processes a single pair. Never fails; errors become `Failed` outcomes.
    pub fn fetch_one(&self, reference: &str, label: &str) -> DownloadOutcome {
        let name = sanitize_label(label);
        match self.try_fetch(reference, &name) {
            Ok(dest) => {
                tracing::info!(%name, dest = %dest.display(), "downloaded");
                DownloadOutcome::Success { name }
            }
            Err(e) => {
                tracing::warn!(%name, %reference, error = %e, "download failed");
                DownloadOutcome::Failed {
                    name,
                    reason: e.to_string(),
                }
            }
        }
    }

    fn try_fetch(&self, reference: &str, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(ImgdlError::EmptyName);
        }
        let address = resolve_reference(reference).ok_or(ImgdlError::MissingIdentifierToken)?;
        fs::create_dir_all(&self.download_dir)?;
        let dest = self.dest_path(name);
        self.tool.retrieve(&address, &dest)?;
        Ok(dest)
    }
}
