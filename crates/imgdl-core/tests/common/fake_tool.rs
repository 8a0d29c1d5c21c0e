//! Stand-in for the external downloader.
//!
//! Writes a small body derived from the address to the destination path, or
//! fails when the address contains `FAIL`, without touching the network.

use imgdl_core::error::{ImgdlError, Result};
use imgdl_core::fetch::RetrievalTool;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct FakeTool {
    calls: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeTool {
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RetrievalTool for FakeTool {
    fn retrieve(&self, address: &str, dest: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((address.to_string(), dest.to_path_buf()));
        if address.contains("FAIL") {
            return Err(ImgdlError::ExternalToolFailure {
                tool: "fake".to_string(),
                detail: "exit status: 8".to_string(),
            });
        }
        std::fs::write(dest, format!("image from {address}"))?;
        Ok(())
    }
}
