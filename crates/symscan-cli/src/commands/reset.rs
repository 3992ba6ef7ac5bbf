use anyhow::{Context, Result};
use symscan_core::service::DetectionService;

use super::GlobalArgs;

pub fn run(global: &GlobalArgs) -> Result<()> {
    let (config, service) = global.connect()?;
    service
        .reset()
        .with_context(|| format!("Reset failed on {}", config.service.base_url))?;
    println!("Server storage cleared");
    Ok(())
}
