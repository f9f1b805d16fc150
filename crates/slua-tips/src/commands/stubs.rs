//! Stub generation command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use slua_keywords::load_keywords;
use slua_stubs::{write_stubs, StubGenerator};

use crate::config::load_config;

/// Run the stubs command. Returns the resolved output path.
pub async fn run(
    config_path: &Path,
    keywords: Option<PathBuf>,
    output: Option<PathBuf>,
    strict: bool,
) -> Result<PathBuf> {
    tracing::info!("Generating stubs...");

    let settings = load_config(config_path)?.stubs;

    let keywords_path = keywords.unwrap_or(settings.keywords);
    let output_path = output.unwrap_or(settings.output);
    let strict = strict || settings.strict;

    let simplifier = settings.simplify.build()?;
    if !simplifier.is_noop() {
        tracing::debug!("Using argument name rules from config");
    }

    let dictionary = load_keywords(&keywords_path)?;
    tracing::info!(
        "Loaded {} entries from {}",
        dictionary.len(),
        keywords_path.display()
    );

    let stubs = StubGenerator::with_simplifier(simplifier)
        .strict(strict)
        .generate(&dictionary)
        .context("Failed to generate stubs")?;

    let resolved = write_stubs(&output_path, &stubs).await?;

    tracing::info!("Generated stubs");
    tracing::info!("Output: {}", resolved.display());

    Ok(resolved)
}
