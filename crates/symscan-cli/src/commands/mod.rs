pub mod config;
pub mod reset;
pub mod results;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use symscan_core::aggregate::AggregateRow;
use symscan_core::config::AppConfig;
use symscan_core::export::export_csv;
use symscan_core::service::HttpDetectionService;

/// Options shared by every subcommand.
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub base_url: Option<String>,
}

impl GlobalArgs {
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref()).with_context(|| {
            match self.config {
                Some(ref p) => format!("Failed to load config {}", p.display()),
                None => "Failed to load config".to_string(),
            }
        })?;
        if let Some(ref url) = self.base_url {
            config.apply_base_url_override(url);
        }
        Ok(config)
    }

    pub fn connect(&self) -> Result<(AppConfig, HttpDetectionService)> {
        let config = self.load_config()?;
        let service = HttpDetectionService::new(&config.service)
            .context("Failed to build HTTP client")?;
        Ok((config, service))
    }
}

/// Write `rows` as CSV, defaulting to the configured file name.
pub fn export_rows(rows: &[AggregateRow], path: Option<&Path>, config: &AppConfig) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.export.file_name));
    export_csv(rows, &path)
        .with_context(|| format!("Failed to export {}", path.display()))?;
    println!("Detection summary saved to {}", path.display());
    Ok(())
}
