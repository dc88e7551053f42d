//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "FullsApps"
//! tagline = "Fullstack Applications development"
//! url = "https://fullsapps.com"
//! base_url = "/"
//! favicon = "img/favicon.ico"
//! organization = "peterdyer7"
//! project = "fullsapps-blog"
//! on_broken_links = "throw"
//! ```

mod info;

pub use info::SiteInfoConfig;

use serde::{Deserialize, Serialize};

/// Reaction to a link whose target route does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Skip link checking entirely.
    Ignore,
    /// Report broken links as plain log lines.
    Log,
    /// Report broken links as warnings, keep building.
    Warn,
    /// Fail the build; no page is written.
    #[default]
    Throw,
}

impl BrokenLinkPolicy {
    /// Whether links are checked at all.
    #[inline]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Ignore)
    }

    /// Whether a broken link aborts the build.
    #[inline]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Throw)
    }
}
