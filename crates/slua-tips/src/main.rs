//! slua-tips CLI - build tooling for the slua.tips documentation site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use slua_plugins::{Order, OrderRule};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "slua-tips")]
#[command(about = "Build tooling for the slua.tips documentation site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to tips.toml config file
    #[arg(short, long, default_value = "tips.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default tips.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate Luau stubs from the keyword dictionary
    Stubs {
        /// Keyword dictionary (defaults to config or "keywords.json")
        #[arg(short, long)]
        keywords: Option<PathBuf>,

        /// Output file (defaults to config or "tools/codegen/out/stubs.luau")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on incomplete entries and unknown result types
        #[arg(long)]
        strict: bool,
    },

    /// Resolve the build plugin order
    Plugins {
        /// Plugin to move
        #[arg(long = "move", requires_all = ["order", "anchor"])]
        moved: Option<String>,

        /// Place the plugin "before" or "after" the anchor
        #[arg(long, requires = "moved")]
        order: Option<Order>,

        /// Plugin to move relative to
        #[arg(long, requires = "moved")]
        anchor: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Stubs {
            keywords,
            output,
            strict,
        } => {
            commands::stubs::run(&cli.config, keywords, output, strict).await?;
        }
        Commands::Plugins {
            moved,
            order,
            anchor,
        } => {
            let rule = match (moved, order, anchor) {
                (Some(plugin), Some(order), Some(anchor)) => Some(OrderRule {
                    plugin,
                    order,
                    anchor,
                }),
                _ => None,
            };
            commands::plugins::run(&cli.config, rule)?;
        }
    }

    Ok(())
}
