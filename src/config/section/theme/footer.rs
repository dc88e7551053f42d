//! `[theme.footer]` configuration.
//!
//! ```toml
//! [theme.footer]
//! style = "dark"
//! copyright = "Copyright © {year} FullsApps"
//!
//! [[theme.footer.links]]
//! title = "Community"
//! items = [{ label = "GitHub", href = "https://github.com/peterdyer7" }]
//! ```

use super::navbar::NavLink;
use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

/// Footer color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

impl FooterStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub style: FooterStyle,

    /// Link columns, rendered left to right.
    pub links: Vec<FooterColumn>,

    /// Copyright line. `{year}` is replaced with the current year at load time.
    pub copyright: String,
}

config_fields!(FooterConfig => FooterFields, "theme.footer" {
    style,
    links,
    copyright,
});

/// A titled column of footer links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub items: Vec<NavLink>,
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for column in &self.links {
            if column.title.trim().is_empty() {
                diag.error(Self::FIELDS.links, "link column needs a non-empty `title`");
            }
            if column.items.is_empty() {
                diag.warn(
                    Self::FIELDS.links,
                    format!("link column '{}' has no items", column.title),
                );
            }
        }
    }

    /// Substitute `{year}` in the copyright line.
    pub fn resolve_copyright(&mut self, year: u16) {
        if self.copyright.contains("{year}") {
            self.copyright = self.copyright.replace("{year}", &year.to_string());
        }
    }

    /// All links across columns, in display order.
    pub fn all_links(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter().flat_map(|c| c.items.iter())
    }
}
