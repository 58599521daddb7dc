//! Static export command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use atelier_static::{SiteBuilder, SiteContent};

use crate::config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static export...");

    let file_config = config::load(config_path)?;
    let build_config = file_config.to_build_config(output, minify);

    let result = SiteBuilder::new(build_config)
        .build(&SiteContent::published())
        .await?;

    tracing::info!(
        "Built {} pages and {} assets in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
