//! `[theme]` section configuration.
//!
//! Presentation settings consumed by the layout components.
//!
//! # Example
//!
//! ```toml
//! [theme.navbar]
//! title = "FullsApps"
//!
//! [theme.footer]
//! style = "dark"
//!
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! ```

mod footer;
mod navbar;
mod prism;

pub use footer::{FooterColumn, FooterConfig, FooterStyle};
pub use navbar::{NavItem, NavLink, NavPosition, NavTarget, NavbarConfig, NavbarLogo};
pub(crate) use navbar::{parse_target, target_fields};
pub use prism::{CodeTheme, PrismConfig};

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
    pub prism: PrismConfig,
}

config_fields!(ThemeSectionConfig => ThemeFields, "theme" {
    navbar,
    footer,
    prism,
});

impl ThemeSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(title) = &self.navbar.title
            && title.trim().is_empty()
        {
            diag.warn(
                Self::FIELDS.navbar,
                "navbar title is empty, the site title will not be shown",
            );
        }
        self.footer.validate(diag);
    }
}
