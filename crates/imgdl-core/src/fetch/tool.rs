//! The external retrieval process.
//!
//! The batch fetcher only depends on [`RetrievalTool`]; [`CommandTool`] is the
//! real implementation and spawns a downloader such as `wget`.

use crate::error::{ImgdlError, Result};
use std::path::Path;
use std::process::Command;

/// Fetches one address into one destination file.
pub trait RetrievalTool: Send + Sync {
    fn retrieve(&self, address: &str, dest: &Path) -> Result<()>;
}

/// Runs an external downloader with an argument vector (no shell involved).
///
/// Invocation: `<program> [--no-check-certificate] <address> -O <dest>`.
/// There is no timeout; a hung process blocks the caller until it exits.
#[derive(Debug, Clone)]
pub struct CommandTool {
    program: String,
    insecure_tls: bool,
}

impl CommandTool {
    pub fn new(program: impl Into<String>, insecure_tls: bool) -> Self {
        Self {
            program: program.into(),
            insecure_tls,
        }
    }

    /// Arguments passed to the program for one retrieval.
    pub fn args(&self, address: &str, dest: &Path) -> Vec<std::ffi::OsString> {
        let mut args = Vec::with_capacity(4);
        if self.insecure_tls {
            args.push("--no-check-certificate".into());
        }
        args.push(address.into());
        args.push("-O".into());
        args.push(dest.as_os_str().to_owned());
        args
    }
}

impl RetrievalTool for CommandTool {
    fn retrieve(&self, address: &str, dest: &Path) -> Result<()> {
        tracing::debug!(program = %self.program, %address, dest = %dest.display(), "spawning retrieval");
        let output = Command::new(&self.program)
            .args(self.args(address, dest))
            .output()
            .map_err(|e| ImgdlError::ExternalToolFailure {
                tool: self.program.clone(),
                detail: format!("failed to start: {e}"),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = match stderr.lines().rev().find(|l| !l.trim().is_empty()) {
            Some(last) => format!("{} ({})", output.status, last.trim()),
            None => output.status.to_string(),
        };
        Err(ImgdlError::ExternalToolFailure {
            tool: self.program.clone(),
            detail,
        })
    }
}
