//! Site initialization module.
//!
//! Creates new site structure with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration and starter content

mod config;
mod structure;
mod validate;

use crate::log;
use anyhow::Result;
use std::path::Path;

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write configuration, starter content and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(root: &Path, mode: InitMode, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    validate::validate_target(root, mode)?;

    structure::create_structure(root)?;

    config::write_config(root)?;
    config::write_starter_content(root)?;
    config::write_ignore_files(root, Path::new("build"))?;

    log!("init"; "site initialized in '{}'", root.display());
    log!("init"; "run 'folio build' to generate it");
    Ok(())
}
