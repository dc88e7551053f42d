//! `[preset]` section: content sources and their options.
//!
//! # Example
//!
//! ```toml
//! [preset.pages]
//! path = "pages"
//!
//! [preset.blog]
//! path = "blog"
//! route_base_path = "blog"
//! title = "FullsApps - blog!"
//! show_reading_time = true
//! edit_url = "https://github.com/peterdyer7/fullsapps-blog/tree/main/"
//!
//! [preset.blog.feed]
//! type = "all"
//! title = "FullsApps Feed"
//! copyright = "Copyright © {year} FullsApps"
//! language = "en"
//!
//! [preset.docs]
//! enable = false
//!
//! [preset.theme]
//! custom_css = "src/css/custom.css"
//! ```

mod blog;
mod content;
mod feed;

pub use blog::BlogPresetConfig;
pub use content::{DocsPresetConfig, PagesPresetConfig};
pub use feed::{FeedOptions, FeedType};

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetSectionConfig {
    pub pages: PagesPresetConfig,
    pub blog: BlogPresetConfig,
    pub docs: DocsPresetConfig,
    pub theme: PresetThemeConfig,
}

impl PresetSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.pages.validate(diag);
        self.blog.validate(diag);
        self.docs.validate(diag);
        self.theme.validate(diag);

        if self.blog.enable
            && self.docs.enable
            && self.blog.route_base_path.trim_matches('/') == self.docs.route_base_path.trim_matches('/')
        {
            diag.error(
                DocsPresetConfig::FIELDS.route_base_path,
                format!(
                    "same route as {} ('{}')",
                    BlogPresetConfig::FIELDS.route_base_path,
                    self.docs.route_base_path
                ),
            );
        }
    }

    /// Resolve content paths against the site root.
    pub fn normalize(&mut self, root: &Path) {
        let join = |p: &Path| crate::utils::path::normalize_path(&root.join(p));
        self.pages.path = join(&self.pages.path);
        self.blog.path = join(&self.blog.path);
        self.docs.path = join(&self.docs.path);
        if let Some(css) = self.theme.custom_css.take() {
            self.theme.custom_css = Some(join(&css));
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetThemeConfig {
    /// Stylesheet appended after the built-in theme, relative to site root.
    pub custom_css: Option<PathBuf>,
}

config_fields!(PresetThemeConfig => PresetThemeFields, "preset.theme" { custom_css });

impl PresetThemeConfig {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(css) = &self.custom_css
            && !css.is_file()
        {
            diag.error(
                Self::FIELDS.custom_css,
                format!("stylesheet '{}' not found", css.display()),
            );
        }
    }
}

/// Route segments must be non-empty once slashes are trimmed.
fn validate_route_base(route: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        diag.error_with_hint(
            field,
            "route base path must not be empty",
            "the site root belongs to the home page",
        );
    } else if trimmed.contains(['?', '#', ' ']) {
        diag.error(field, format!("'{route}' is not a valid route segment"));
    }
}

/// Missing content directories are not fatal: the section is just empty.
fn validate_content_dir(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if !path.is_dir() {
        diag.warn(
            field,
            format!("directory '{}' not found, section will be empty", path.display()),
        );
    }
}

fn validate_edit_url(edit_url: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(edit_url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        _ => diag.error_with_hint(
            field,
            format!("'{edit_url}' is not an http(s) URL"),
            "e.g.: https://github.com/user/repo/tree/main/",
        ),
    }
}
