use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

/// Record source endpoint settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

/// Browsing defaults consumed by the presentation layer.
#[derive(Debug, Deserialize, Clone)]
pub struct BrowseConfig {
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

fn default_page_size() -> i64 {
    20
}
fn default_suggestion_limit() -> usize {
    10
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate api
    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    if config.api.timeout_secs == 0 {
        anyhow::bail!("api.timeout_secs must be > 0");
    }

    // Validate browse
    if config.browse.page_size < 1 {
        anyhow::bail!("browse.page_size must be >= 1");
    }
    if config.browse.suggestion_limit == 0 {
        anyhow::bail!("browse.suggestion_limit must be >= 1");
    }

    Ok(config)
}
