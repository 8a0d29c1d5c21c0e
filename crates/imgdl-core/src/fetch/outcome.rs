//! Per-item result of a batch run.

use serde::Serialize;

/// What happened to one link/label pair, keyed by the sanitized name attempted.
///
/// Serializes as `{"name": .., "status": "success"}` or
/// `{"name": .., "status": "failed", "error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DownloadOutcome {
    Success {
        name: String,
    },
    Failed {
        name: String,
        #[serde(rename = "error")]
        reason: String,
    },
}

impl DownloadOutcome {
    pub fn name(&self) -> &str {
        match self {
            DownloadOutcome::Success { name } | DownloadOutcome::Failed { name, .. } => name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Success { .. })
    }
}
