//! `imgdl serve` – run the HTTP API.

use anyhow::Result;
use imgdl_core::config::ImgdlConfig;
use imgdl_core::{fetch, server};

pub async fn run_serve(cfg: ImgdlConfig) -> Result<()> {
    let tool = fetch::command_tool(&cfg.fetch);
    println!("Serving on http://{} (API description at /swagger.json)", cfg.bind);
    server::serve(cfg, tool).await
}
