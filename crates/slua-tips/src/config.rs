//! Configuration file structure (tips.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use slua_plugins::{OrderRule, PluginDescriptor};
use slua_stubs::{Replacement, RuleSimplifier};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub stubs: StubsConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize)]
pub struct StubsConfig {
    #[serde(default = "default_keywords")]
    pub keywords: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub simplify: SimplifyConfig,
}

impl Default for StubsConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            output: default_output(),
            strict: false,
            simplify: SimplifyConfig::default(),
        }
    }
}

/// Argument name rules, see [`RuleSimplifier`].
#[derive(Debug, Deserialize, Default)]
pub struct SimplifyConfig {
    #[serde(default)]
    pub strip_prefixes: Vec<String>,
    #[serde(default)]
    pub strip_suffixes: Vec<String>,
    #[serde(default)]
    pub replace: Vec<Replacement>,
}

impl SimplifyConfig {
    pub fn build(&self) -> Result<RuleSimplifier> {
        RuleSimplifier::new(
            self.strip_prefixes.clone(),
            self.strip_suffixes.clone(),
            &self.replace,
        )
        .context("Invalid [stubs.simplify] rules")
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct SiteConfig {
    /// Build plugins in their registration order
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,
    #[serde(default)]
    pub plugin_order: Vec<OrderRule>,
}

fn default_keywords() -> PathBuf {
    PathBuf::from("keywords.json")
}
fn default_output() -> PathBuf {
    PathBuf::from("tools/codegen/out/stubs.luau")
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}
