//! folio - A static site generator for config-driven personal blogs.

mod cli;
mod config;
mod core;
mod embed;
mod logger;
mod page;
mod render;
mod utils;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, init::InitMode};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // A new site has no config to load yet.
    let config = match &cli.command {
        Commands::Init { name, dry } => return init_site(name.as_deref(), *dry),
        _ => SiteConfig::load(&cli)?,
    };

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Validate { .. } => cli::validate::validate_site(&config),
        Commands::Dump { pretty } => cli::dump::dump_config(&config, *pretty),
        Commands::Init { .. } => Ok(()),
    }
}

/// `folio init [NAME]`: a named site goes into a subdirectory of cwd.
fn init_site(name: Option<&Path>, dry: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };
    cli::init::new_site(&root, mode, dry)
}
