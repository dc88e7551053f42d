//! `[preset.pages]` and `[preset.docs]` configuration.
//!
//! Both sections point at a directory of HTML fragments that become
//! standalone pages; docs are mounted under their own route segment.

use super::{validate_content_dir, validate_edit_url, validate_route_base};
use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesPresetConfig {
    /// Build standalone pages.
    pub enable: bool,

    /// Directory of page fragments, relative to site root.
    pub path: PathBuf,
}

config_fields!(PagesPresetConfig => PagesPresetFields, "preset.pages" { enable, path });

impl Default for PagesPresetConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "pages".into(),
        }
    }
}

impl PagesPresetConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable {
            validate_content_dir(&self.path, Self::FIELDS.path, diag);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsPresetConfig {
    /// Build the docs section.
    pub enable: bool,

    /// Directory of doc fragments, relative to site root.
    pub path: PathBuf,

    /// URL segment the docs live under, e.g. "docs" -> `/docs/intro/`.
    pub route_base_path: String,

    /// Base URL for "Edit this page" links; the doc path is appended.
    pub edit_url: Option<String>,
}

config_fields!(DocsPresetConfig => DocsPresetFields, "preset.docs" {
    enable,
    path,
    route_base_path,
    edit_url,
});

impl Default for DocsPresetConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "docs".into(),
            route_base_path: "docs".into(),
            edit_url: None,
        }
    }
}

impl DocsPresetConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        validate_route_base(&self.route_base_path, Self::FIELDS.route_base_path, diag);
        validate_content_dir(&self.path, Self::FIELDS.path, diag);
        if let Some(edit_url) = &self.edit_url {
            validate_edit_url(edit_url, Self::FIELDS.edit_url, diag);
        }
    }
}
