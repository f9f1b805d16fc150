//! Write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing slua-tips...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'slua-tips stubs' to generate stubs.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# slua-tips configuration

[stubs]
# Keyword dictionary (.json, .yaml or .yml)
keywords = "keywords.json"

# Generated Luau stubs, overwritten on every run
output = "tools/codegen/out/stubs.luau"

# Fail on functions without signatures or results, and on unknown result types
strict = false

[stubs.simplify]
# Decorations removed from argument names
strip_prefixes = []
strip_suffixes = []

# [[stubs.simplify.replace]]
# pattern = "^end$"
# with = "end_"

[site]
# Build plugins in registration order
plugins = ["vitepress", "@tailwindcss/vite:scan", "git-changelog"]

# Tailwind's scanner must run after vitepress has resolved its config
[[site.plugin_order]]
plugin = "@tailwindcss/vite:scan"
order = "after"
anchor = "vitepress"
"#;
