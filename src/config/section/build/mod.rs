//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "build"            # Output directory (relative to site root)
//! static_dir = "static"       # Copied verbatim into the output root
//! minify = true               # Minify stylesheets
//! ```

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// Static files directory, mirrored into the output root.
    pub static_dir: PathBuf,

    /// Minify stylesheets.
    pub minify: bool,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

config_fields!(BuildSectionConfig => BuildFields, "build" {
    output,
    static_dir,
    minify,
});

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "build".into(),
            static_dir: "static".into(),
            minify: true,
            clean: false,
        }
    }
}

impl BuildSectionConfig {
    /// Validate build configuration.
    ///
    /// `--clean` wipes the output directory, so it must not be the
    /// project root or the static directory.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() || self.output == root {
            diag.error_with_hint(
                Self::FIELDS.output,
                "output directory must not be the project root",
                "use a subdirectory, e.g.: output = \"build\"",
            );
        } else if self.output == self.static_dir {
            diag.error(
                Self::FIELDS.output,
                format!(
                    "output directory must differ from {}",
                    Self::FIELDS.static_dir
                ),
            );
        }
    }

    /// Resolve relative paths against `root`.
    pub fn normalize(&mut self, root: &Path) {
        self.output = crate::utils::path::normalize_path(&root.join(&self.output));
        self.static_dir = crate::utils::path::normalize_path(&root.join(&self.static_dir));
    }
}
