use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default rendering for command output: plain text or JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/urlq/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlqConfig {
    /// Default rendering for command output: "text" or "json".
    #[serde(default)]
    pub output: OutputFormat,
    /// URL decomposed by `urlq demo`.
    #[serde(default = "default_demo_url")]
    pub demo_url: String,
}

fn default_demo_url() -> String {
    "https://example.com/path?query=value".to_string()
}

impl Default for UrlqConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            demo_url: default_demo_url(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlq")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlqConfig> {
    load_from(&config_path()?)
}

/// Load configuration from an explicit path, creating a default file if
/// none exists there.
pub fn load_from(path: &Path) -> Result<UrlqConfig> {
    if !path.exists() {
        let default_cfg = UrlqConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: UrlqConfig = toml::from_str(&data)?;
    Ok(cfg)
}
