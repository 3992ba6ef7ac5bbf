use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use symscan_core::service::DetectionService;

use super::{export_rows, GlobalArgs};
use crate::summary::print_results;

#[derive(Args)]
pub struct ResultsArgs {
    /// Page to show (1-based, clamped to the document)
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Export the page's detection summary as CSV (default file name from config)
    #[arg(long, value_name = "PATH")]
    pub export: Option<Option<PathBuf>>,
}

pub fn run(global: &GlobalArgs, args: &ResultsArgs) -> Result<()> {
    let (config, service) = global.connect()?;
    let results = service
        .fetch_results()
        .context("Failed to fetch results")?;

    let page = print_results(&results, args.page);

    if let Some(ref path) = args.export {
        export_rows(&results.page_rows(page), path.as_deref(), &config)?;
    }
    Ok(())
}
