//! Site directory structure creation.
//!
//! Creates the standard folio site directory layout.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Standard site directory structure.
const SITE_DIRS: &[&str] = &["pages", "blog", "static/img", "src/css"];

/// Create site directory structure at the given root.
///
/// The root directory is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}
