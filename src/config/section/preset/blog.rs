//! `[preset.blog]` configuration.

use super::{FeedOptions, validate_content_dir, validate_edit_url, validate_route_base};
use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPresetConfig {
    /// Build the blog at all.
    pub enable: bool,

    /// Directory of post fragments (`YYYY-MM-DD-slug.html`), relative to site root.
    pub path: PathBuf,

    /// URL segment the blog lives under, e.g. "blog" -> `/blog/`.
    pub route_base_path: String,

    /// Title of the blog index page.
    pub title: String,

    /// Description meta of the blog index page.
    pub description: String,

    /// Show "N min read" on posts.
    pub show_reading_time: bool,

    /// Base URL for "Edit this page" links; the post path is appended.
    pub edit_url: Option<String>,

    /// Feed options, forwarded to feed tooling.
    pub feed: Option<FeedOptions>,
}

config_fields!(BlogPresetConfig => BlogPresetFields, "preset.blog" {
    enable,
    path,
    route_base_path,
    title,
    description,
    show_reading_time,
    edit_url,
    feed,
});

impl Default for BlogPresetConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "blog".into(),
            route_base_path: "blog".into(),
            title: "Blog".into(),
            description: String::new(),
            show_reading_time: false,
            edit_url: None,
            feed: None,
        }
    }
}

impl BlogPresetConfig {
    /// Route of the blog index, e.g. `/blog/`.
    pub fn index_route(&self) -> String {
        format!("/{}/", self.route_base_path.trim_matches('/'))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }
        validate_route_base(&self.route_base_path, Self::FIELDS.route_base_path, diag);
        validate_content_dir(&self.path, Self::FIELDS.path, diag);
        if let Some(edit_url) = &self.edit_url {
            validate_edit_url(edit_url, Self::FIELDS.edit_url, diag);
        }
        if let Some(feed) = &self.feed {
            feed.validate(diag);
        }
    }
}
