//! Development command: build, then serve with live reload.

use std::path::Path;

use anyhow::Result;
use atelier_server::{PreviewConfig, PreviewServer};
use atelier_static::{SiteBuilder, SiteContent};

use crate::config;

/// Run the dev command.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    let file_config = config::load(config_path)?;

    let mut build_config = file_config.to_build_config(None, None);
    build_config.reload_script = Some("/__reload.js".to_string());

    let dist_dir = build_config.output_dir.clone();
    let public_dir = build_config.public_dir.clone();

    let builder = SiteBuilder::new(build_config);
    let content = SiteContent::published();

    let result = builder.build(&content).await?;
    tracing::info!("Built {} pages in {}ms", result.pages, result.duration_ms);

    let mut watch_paths = vec![config_path.to_path_buf()];
    watch_paths.extend(public_dir);

    let preview_config = PreviewConfig {
        dist_dir,
        watch_paths,
        port,
        open,
        ..Default::default()
    };

    tracing::info!("Starting preview server on port {}", port);

    PreviewServer::new(preview_config, builder, content)
        .start()
        .await?;

    Ok(())
}
