//! `[home]` section configuration: the landing page.
//!
//! ```toml
//! [home]
//! title = "Hello from {title}"
//! description = "Description will go into a meta tag in <head />"
//!
//! [home.cta]
//! label = "Read the blog"
//! to = "/blog"          # optional: without a target the label is plain text
//!
//! [[home.features]]
//! title = "Fullstack"
//! body = "From the database to the browser."
//! ```

use super::theme::{NavTarget, parse_target, target_fields};
use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Document title of the landing page. `{title}` expands to `site.title`.
    pub title: String,

    /// Meta description of the landing page.
    pub description: String,

    /// Optional call-to-action button under the hero tagline.
    pub cta: Option<CallToAction>,

    /// Feature cards below the hero.
    pub features: Vec<Feature>,
}

config_fields!(HomeConfig => HomeFields, "home" {
    title,
    description,
    cta,
    features,
});

/// Hero button. Rendered as a link when it has a target, as text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCallToAction", into = "RawCallToAction")]
pub struct CallToAction {
    pub label: String,
    pub target: Option<NavTarget>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCallToAction {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
}

impl TryFrom<RawCallToAction> for CallToAction {
    type Error = String;

    fn try_from(raw: RawCallToAction) -> Result<Self, Self::Error> {
        let target = parse_target(&raw.label, raw.to, raw.href)?;
        Ok(Self {
            label: raw.label,
            target,
        })
    }
}

impl From<CallToAction> for RawCallToAction {
    fn from(cta: CallToAction) -> Self {
        let (to, href) = target_fields(cta.target);
        Self {
            label: cta.label,
            to,
            href,
        }
    }
}

/// One feature card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            title: "Hello from {title}".into(),
            description: String::new(),
            cta: None,
            features: Vec::new(),
        }
    }
}

impl HomeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(cta) = &self.cta
            && cta.label.trim().is_empty()
        {
            diag.error(Self::FIELDS.cta, "call to action needs a non-empty `label`");
        }
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                format!("{} must not be empty", Self::FIELDS.title),
                "remove the key to use the default \"Hello from {title}\"",
            );
        }
        for (i, feature) in self.features.iter().enumerate() {
            if feature.title.trim().is_empty() {
                diag.error(
                    Self::FIELDS.features,
                    format!("feature #{} needs a non-empty `title`", i + 1),
                );
            }
        }
    }

    /// Expand `{title}` using the site title.
    pub fn resolve_title(&mut self, site_title: &str) {
        if self.title.contains("{title}") {
            self.title = self.title.replace("{title}", site_title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::config::SiteConfig;

    #[test]
    fn test_parse_home() {
        let config = test_parse_config(
            r#"[home]
description = "Landing"

[home.cta]
label = "Read the blog"
to = "/blog"

[[home.features]]
title = "Fullstack"
body = "From the database to the browser."

[[home.features]]
title = "Cloud""#,
        );
        let home = &config.home;
        assert_eq!(home.title, "Hello from {title}");
        assert_eq!(home.features.len(), 2);
        assert_eq!(home.features[1].body, "");
        let cta = home.cta.as_ref().unwrap();
        assert_eq!(cta.target, Some(NavTarget::Route("/blog".into())));
    }

    #[test]
    fn test_cta_without_target() {
        let config = test_parse_config("[home.cta]\nlabel = \"Docusaurus Tutorial - 5min ⏱️\"");
        assert_eq!(config.home.cta.unwrap().target, None);
    }

    #[test]
    fn test_cta_with_two_targets_rejected() {
        let err = SiteConfig::from_str(
            "[home.cta]\nlabel = \"Go\"\nto = \"/blog\"\nhref = \"https://example.com\"",
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("exactly one"));
    }

    #[test]
    fn test_resolve_title() {
        let mut home = HomeConfig::default();
        home.resolve_title("FullsApps");
        assert_eq!(home.title, "Hello from FullsApps");
    }

    #[test]
    fn test_untitled_feature_rejected() {
        let home = HomeConfig {
            features: vec![Feature {
                title: " ".into(),
                body: "x".into(),
            }],
            ..HomeConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        home.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
