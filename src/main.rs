//! slugfeed - blog permalinks, excerpts and feeds.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use slugfeed::cli::{self, Cli, Commands};
use slugfeed::config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Slug { args } => cli::inspect::run_slug(args),
        Commands::Excerpt { args } => cli::inspect::run_excerpt(args),
        Commands::Build { .. } => {
            let config = SiteConfig::load(&cli)?;
            cli::build::build_site(&config).map(|_| ())
        }
        Commands::Query { args } => {
            let config = SiteConfig::load(&cli)?;
            cli::query::run_query(args, &config)
        }
    }
}
