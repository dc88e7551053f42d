//! `[theme.navbar]` configuration.
//!
//! Each item is either a link with exactly one target or a dropdown of
//! links. The invariant is enforced while deserializing, so a parsed
//! `NavItem` can never carry zero or two targets.
//!
//! ```toml
//! [theme.navbar]
//! title = "FullsApps"
//!
//! [[theme.navbar.items]]
//! label = "Blog"
//! to = "/blog"
//!
//! [[theme.navbar.items]]
//! label = "Topics"
//! items = [{ label = "AWS", href = "/aws" }]
//!
//! [[theme.navbar.items]]
//! label = "GitHub"
//! href = "https://github.com/peterdyer7/fullsapps-blog"
//! position = "right"
//! ```

use crate::utils::path::route::join_base;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Brand text next to the logo. Falls back to `site.title`.
    pub title: Option<String>,

    /// Brand image, relative to the static directory.
    pub logo: Option<NavbarLogo>,

    /// Navigation entries in display order.
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarLogo {
    pub alt: String,
    pub src: String,
}

/// Which side of the navbar an item sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// Where a link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Site route (`to`), prefixed with `base_url` when rendered.
    Route(String),
    /// Raw URL or path (`href`), rendered as written.
    Href(String),
}

impl NavTarget {
    /// The target as configured.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Route(s) | Self::Href(s) => s,
        }
    }

    /// Value for the rendered `href` attribute.
    pub fn resolve(&self, base_url: &str) -> Cow<'_, str> {
        match self {
            Self::Route(route) => Cow::Owned(join_base(base_url, route)),
            Self::Href(href) => Cow::Borrowed(href),
        }
    }
}

/// A labelled link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavLink", into = "RawNavLink")]
pub struct NavLink {
    pub label: String,
    pub target: NavTarget,
}

/// A top-level navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavItem", into = "RawNavItem")]
pub enum NavItem {
    Link {
        link: NavLink,
        position: NavPosition,
    },
    Dropdown {
        label: String,
        position: NavPosition,
        items: Vec<NavLink>,
    },
}

impl NavItem {
    pub fn position(&self) -> NavPosition {
        match self {
            Self::Link { position, .. } | Self::Dropdown { position, .. } => *position,
        }
    }

    /// Every link reachable from this item, in display order.
    pub fn links(&self) -> Vec<&NavLink> {
        match self {
            Self::Link { link, .. } => vec![link],
            Self::Dropdown { items, .. } => items.iter().collect(),
        }
    }
}

// ============================================================================
// TOML representation
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNavLink {
    #[serde(default)]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNavItem {
    #[serde(default)]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    #[serde(default)]
    position: NavPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Vec<RawNavLink>>,
}

/// Target from a `to`/`href` pair. `None` when neither is set.
pub(crate) fn parse_target(
    label: &str,
    to: Option<String>,
    href: Option<String>,
) -> Result<Option<NavTarget>, String> {
    match (to, href) {
        (Some(to), None) => {
            if !to.starts_with('/') {
                return Err(format!(
                    "navigation item '{label}': `to` must be a site route starting with '/', got '{to}'"
                ));
            }
            Ok(Some(NavTarget::Route(to)))
        }
        (None, Some(href)) if !href.trim().is_empty() => Ok(Some(NavTarget::Href(href))),
        (None, _) => Ok(None),
        (Some(_), Some(_)) => Err(format!(
            "navigation item '{label}' sets both `to` and `href`, set exactly one"
        )),
    }
}

/// Inverse of [`parse_target`]: the `(to, href)` pair.
pub(crate) fn target_fields(target: Option<NavTarget>) -> (Option<String>, Option<String>) {
    match target {
        Some(NavTarget::Route(to)) => (Some(to), None),
        Some(NavTarget::Href(href)) => (None, Some(href)),
        None => (None, None),
    }
}

impl TryFrom<RawNavLink> for NavLink {
    type Error = String;

    fn try_from(raw: RawNavLink) -> Result<Self, Self::Error> {
        if raw.label.trim().is_empty() {
            return Err("navigation item needs a non-empty `label`".into());
        }

        let Some(target) = parse_target(&raw.label, raw.to, raw.href)? else {
            return Err(format!(
                "navigation item '{}' has no target, set `to` or `href`",
                raw.label
            ));
        };

        Ok(Self {
            label: raw.label,
            target,
        })
    }
}

impl From<NavLink> for RawNavLink {
    fn from(link: NavLink) -> Self {
        let (to, href) = target_fields(Some(link.target));
        Self {
            label: link.label,
            to,
            href,
        }
    }
}

impl TryFrom<RawNavItem> for NavItem {
    type Error = String;

    fn try_from(raw: RawNavItem) -> Result<Self, Self::Error> {
        let Some(items) = raw.items else {
            let link = NavLink::try_from(RawNavLink {
                label: raw.label,
                to: raw.to,
                href: raw.href,
            })?;
            return Ok(Self::Link {
                link,
                position: raw.position,
            });
        };

        if raw.to.is_some() || raw.href.is_some() {
            return Err(format!(
                "dropdown '{}' must not set `to` or `href`",
                raw.label
            ));
        }
        if items.is_empty() {
            return Err(format!("dropdown '{}' has no items", raw.label));
        }
        if raw.label.trim().is_empty() {
            return Err("dropdown needs a non-empty `label`".into());
        }

        let items = items
            .into_iter()
            .map(NavLink::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::Dropdown {
            label: raw.label,
            position: raw.position,
            items,
        })
    }
}

impl From<NavItem> for RawNavItem {
    fn from(item: NavItem) -> Self {
        match item {
            NavItem::Link { link, position } => {
                let raw = RawNavLink::from(link);
                Self {
                    label: raw.label,
                    to: raw.to,
                    href: raw.href,
                    position,
                    items: None,
                }
            }
            NavItem::Dropdown {
                label,
                position,
                items,
            } => Self {
                label,
                to: None,
                href: None,
                position,
                items: Some(items.into_iter().map(RawNavLink::from).collect()),
            },
        }
    }
}
