//! `imgdl fetch` – download every link/name pair, printing progress per item.

use anyhow::Result;
use imgdl_core::config::FetchConfig;
use imgdl_core::fetch::{self, BatchFetcher, DownloadOutcome};
use std::path::PathBuf;

/// Command-line overrides for the `[fetch]` config section.
#[derive(Debug, Default)]
pub struct FetchArgs {
    pub links: Option<PathBuf>,
    pub names: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub insecure: bool,
}

impl FetchArgs {
    fn apply(self, cfg: &mut FetchConfig) {
        if let Some(links) = self.links {
            cfg.link_list = links;
        }
        if let Some(names) = self.names {
            cfg.name_list = names;
        }
        if let Some(out) = self.out {
            cfg.download_dir = out;
        }
        cfg.insecure_tls |= self.insecure;
    }
}

fn progress_line(reference: &str, outcome: &DownloadOutcome) -> String {
    match outcome {
        DownloadOutcome::Success { name } => format!("Downloaded and saved {name} successfully."),
        DownloadOutcome::Failed { reason, .. } => format!("Failed to download {reference}: {reason}"),
    }
}

pub fn run_fetch(cfg: &mut FetchConfig, args: FetchArgs) -> Result<()> {
    args.apply(cfg);
    if cfg.insecure_tls {
        eprintln!("warning: certificate verification is disabled");
    }

    let fetcher = BatchFetcher::new(
        fetch::command_tool(cfg),
        cfg.download_dir.clone(),
        cfg.extension.clone(),
    );
    let outcomes = fetch::run_from_lists(&fetcher, cfg, |reference, outcome| {
        println!("{}", progress_line(reference, outcome));
    })?;

    let ok = outcomes.iter().filter(|o| o.is_success()).count();
    println!(
        "{ok} of {} downloaded into {}",
        outcomes.len(),
        cfg.download_dir.display()
    );
    Ok(())
}
