//! CLI for imgdl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgdl_core::config::{self, ImgdlConfig};
use std::path::{Path, PathBuf};

use commands::{run_convert, run_fetch, run_serve, FetchArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "imgdl")]
#[command(about = "imgdl: batch image downloader and spreadsheet column extractor", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/imgdl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the HTTP API (/download_images, /upload_convert, /swagger.json).
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:8080 (default from config).
        #[arg(long, value_name = "HOST:PORT")]
        bind: Option<String>,
        /// Disable certificate verification in the retrieval tool.
        #[arg(long)]
        insecure: bool,
    },

    /// Download one image per link/name pair from two list files.
    Fetch {
        /// Newline-delimited list of shared-drive links.
        #[arg(long, value_name = "PATH")]
        links: Option<PathBuf>,
        /// Newline-delimited list of names, one per link.
        #[arg(long, value_name = "PATH")]
        names: Option<PathBuf>,
        /// Directory to save images into.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Disable certificate verification in the retrieval tool.
        #[arg(long)]
        insecure: bool,
    },

    /// Extract the configured columns from a CSV/XLSX file into a new CSV.
    Convert {
        /// Input spreadsheet (.csv or .xlsx).
        file: PathBuf,
        /// Output CSV (default: processed_data.csv next to the input).
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<ImgdlConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Serve { bind, insecure } => {
                if let Some(bind) = bind {
                    cfg.bind = bind;
                }
                cfg.fetch.insecure_tls |= insecure;
                run_serve(cfg).await?;
            }
            CliCommand::Fetch {
                links,
                names,
                out,
                insecure,
            } => {
                let args = FetchArgs {
                    links,
                    names,
                    out,
                    insecure,
                };
                run_fetch(&mut cfg.fetch, args)?;
            }
            CliCommand::Convert { file, out } => run_convert(&cfg.convert, &file, out.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
