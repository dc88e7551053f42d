//! `[site]` identity fields.

use super::BrokenLinkPolicy;
use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Site identity: who the site is and where it lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title, shown in the hero banner and every page title.
    pub title: String,

    /// One-line description under the title.
    pub tagline: String,

    /// Canonical origin, e.g. "https://example.com". No path component.
    pub url: String,

    /// Path the site is served under. Starts and ends with `/`.
    pub base_url: String,

    /// Favicon, relative to the static directory.
    pub favicon: Option<PathBuf>,

    /// Owner of the source repository (GitHub user or org).
    pub organization: String,

    /// Name of the source repository.
    pub project: String,

    /// Language code for `<html lang>` (e.g., "en", "zh-Hans").
    pub language: String,

    /// What to do when a page links to a route that does not exist.
    pub on_broken_links: BrokenLinkPolicy,
}

config_fields!(SiteInfoConfig => SiteInfoFields, "site" {
    title,
    tagline,
    url,
    base_url,
    favicon,
    organization,
    project,
    language,
    on_broken_links,
});

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: String::new(),
            base_url: "/".into(),
            favicon: None,
            organization: String::new(),
            project: String::new(),
            language: "en".into(),
            on_broken_links: BrokenLinkPolicy::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site identity.
    ///
    /// # Checks
    /// - `title` and `url` are non-empty (no default is substituted)
    /// - `url` is an http(s) URL with a host and no path
    /// - `base_url` starts and ends with `/`
    /// - `favicon` exists under `static_dir` (warning only)
    pub fn validate(&self, static_dir: &Path, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                format!("{} must not be empty", Self::FIELDS.title),
                "set a title, e.g.: title = \"My Blog\"",
            );
        }

        self.validate_url(diag);

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("'{}' must start and end with '/'", self.base_url),
                "use \"/\" for a site served at the domain root",
            );
        }

        if self.language.trim().is_empty() {
            diag.error(Self::FIELDS.language, "language code must not be empty");
        }

        if let Some(favicon) = &self.favicon
            && !static_dir.join(favicon).is_file()
        {
            diag.warn(
                Self::FIELDS.favicon,
                format!(
                    "'{}' not found in static directory '{}'",
                    favicon.display(),
                    static_dir.display()
                ),
            );
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.url.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!("{} must not be empty", Self::FIELDS.url),
                "set the production origin, e.g.: url = \"https://example.com\"",
            );
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if parsed.path().trim_matches('/') != "" {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("URL must not contain a path ('{}')", parsed.path()),
                        format!("move the path into {}", Self::FIELDS.base_url),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }

    /// Absolute URL of a site route, e.g. `https://example.com/blog/`.
    pub fn absolute_url(&self, route: &str) -> String {
        let origin = self.url.trim_end_matches('/');
        let path = crate::utils::path::route::join_base(&self.base_url, route);
        format!("{origin}{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(info: &SiteInfoConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        info.validate(Path::new("/nonexistent-static"), &mut diag);
        diag
    }

    fn valid_info() -> SiteInfoConfig {
        SiteInfoConfig {
            title: "FullsApps".into(),
            url: "https://fullsapps.com".into(),
            ..SiteInfoConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.site.on_broken_links, BrokenLinkPolicy::Throw);
    }

    #[test]
    fn test_valid_info_passes() {
        assert!(validate(&valid_info()).into_result().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let info = SiteInfoConfig {
            title: "   ".into(),
            ..valid_info()
        };
        let diag = validate(&info);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteInfoConfig::FIELDS.title);
    }

    #[test]
    fn test_empty_url_rejected() {
        let info = SiteInfoConfig {
            url: String::new(),
            ..valid_info()
        };
        let diag = validate(&info);
        assert!(diag.errors().iter().any(|e| e.field == SiteInfoConfig::FIELDS.url));
    }

    #[test]
    fn test_url_scheme_and_path() {
        let info = SiteInfoConfig {
            url: "ftp://example.com/blog".into(),
            ..valid_info()
        };
        // bad scheme + path component
        assert_eq!(validate(&info).len(), 2);

        let info = SiteInfoConfig {
            url: "not a url".into(),
            ..valid_info()
        };
        assert_eq!(validate(&info).len(), 1);
    }

    #[test]
    fn test_base_url_slashes() {
        let info = SiteInfoConfig {
            base_url: "blog".into(),
            ..valid_info()
        };
        let diag = validate(&info);
        assert_eq!(diag.errors()[0].field, SiteInfoConfig::FIELDS.base_url);
    }

    #[test]
    fn test_missing_favicon_is_warning() {
        let info = SiteInfoConfig {
            favicon: Some("img/favicon.ico".into()),
            ..valid_info()
        };
        let diag = validate(&info);
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_absolute_url() {
        let mut info = valid_info();
        assert_eq!(info.absolute_url("/blog"), "https://fullsapps.com/blog");
        info.base_url = "/site/".into();
        assert_eq!(info.absolute_url("/"), "https://fullsapps.com/site/");
    }
}
