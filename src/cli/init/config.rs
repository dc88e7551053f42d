//! Configuration and starter content generation.
//!
//! Creates folio.toml, a sample page and post, the custom stylesheet and
//! ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::embed::init::{ABOUT_HTML, CONFIG_TOML, CUSTOM_CSS, WELCOME_HTML};
use crate::utils::date::Date;

/// Default config filename
const CONFIG_FILE: &str = "folio.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// folio.toml content, with a version header.
pub fn generate_config_template() -> String {
    format!(
        "# folio configuration file (v{})\n{}",
        env!("CARGO_PKG_VERSION"),
        CONFIG_TOML
    )
}

/// Write default folio.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("failed to write config file '{}'", path.display()))
}

/// Write the sample page, the first post (dated today) and `custom.css`.
pub fn write_starter_content(root: &Path) -> Result<()> {
    let post = format!("blog/{}-welcome.html", Date::today());
    let files = [
        ("pages/about.html", ABOUT_HTML),
        (post.as_str(), WELCOME_HTML),
        ("src/css/custom.css", CUSTOM_CSS),
    ];

    for (relative, content) in files {
        let path = root.join(relative);
        fs::write(&path, content)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
    }
    Ok(())
}

/// Write .gitignore with standard patterns
///
/// Patterns include:
/// - Output directory (e.g., `/build/`)
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let content = format!("{}\n.DS_Store\n", output_pattern.display());

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
