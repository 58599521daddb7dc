//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use atelier_static::BuildConfig;

/// Configuration file structure (site.toml). Every field has a default, so
/// the file itself is optional.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_public")]
    pub public: String,
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            author: default_author(),
            base_url: default_base_url(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            public: default_public(),
            minify: default_minify(),
        }
    }
}

fn default_title() -> String {
    "Qianbao Tu".to_string()
}
fn default_author() -> String {
    "Qianbao Tu".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_public() -> String {
    "public".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

impl ConfigFile {
    /// Translate the file (plus CLI overrides) into a build configuration.
    pub fn to_build_config(
        &self,
        output: Option<PathBuf>,
        minify: Option<bool>,
    ) -> BuildConfig {
        BuildConfig {
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.build.output)),
            public_dir: Some(PathBuf::from(&self.build.public)),
            base_url: self.site.base_url.clone(),
            site_title: self.site.title.clone(),
            author: self.site.author.clone(),
            minify: minify.unwrap_or(self.build.minify),
            reload_script: None,
        }
    }
}
