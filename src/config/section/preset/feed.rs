//! `[preset.blog.feed]` options.
//!
//! Feed files are produced by downstream tooling; folio only validates the
//! options and forwards them (see `folio dump`).

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Which feed flavors to publish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    Rss,
    Atom,
    Json,
    /// Every supported flavor.
    #[default]
    All,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedOptions {
    /// Feed flavor: rss | atom | json | all.
    #[serde(rename = "type")]
    pub kind: FeedType,

    /// Feed title. Falls back to the site title downstream.
    pub title: Option<String>,

    /// Copyright notice. `{year}` is replaced with the current year.
    pub copyright: String,

    /// Language code of the feed.
    pub language: Option<String>,
}

config_fields!(FeedOptions => FeedFields, "preset.blog.feed" {
    kind as "type",
    title,
    copyright,
    language,
});

impl FeedOptions {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.copyright.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.copyright,
                "feed copyright must not be empty",
                "e.g.: copyright = \"Copyright © {year} My Blog\"",
            );
        }
        if let Some(language) = &self.language
            && language.trim().is_empty()
        {
            diag.error(Self::FIELDS.language, "feed language must not be empty when set");
        }
    }

    /// Substitute `{year}` in the copyright notice.
    pub fn resolve_copyright(&mut self, year: u16) {
        self.copyright = self.copyright.replace("{year}", &year.to_string());
    }
}
