//! Site validation command.
//!
//! Composes every page in memory and checks internal links without writing
//! anything. `folio build` runs the same checks before its write phase.

mod report;

use std::path::Path;

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;

use crate::config::{BrokenLinkPolicy, SiteConfig};
use crate::core::conflict::{detect_conflicts, print_conflicts};
use crate::core::{LinkKind, UrlPath};
use crate::embed::css::{CSS_DIR, CUSTOM_FILE, THEME_FILE};
use crate::log;
use crate::render::{RenderedPage, SiteContent, compose_site};
use crate::utils::{plural_count, plural_s};

pub use report::{BrokenLink, LinkReport};

/// Validate routes and links of the whole site.
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let content = SiteContent::collect(config)?;
    let pages = compose_site(config, &content);
    log!("validate"; "checking {}", plural_count(pages.len(), "page"));

    ensure_unique_routes(config, &pages)?;

    let report = check_links(config, &pages);
    apply_policy(config.site.on_broken_links, &report)?;
    if report.is_empty() {
        log!("validate"; "{}", report);
    }
    Ok(())
}

/// Fail when two sources produce the same route.
pub(crate) fn ensure_unique_routes(config: &SiteConfig, pages: &[RenderedPage]) -> Result<()> {
    let conflicts = detect_conflicts(
        pages
            .iter()
            .map(|p| (&p.route.permalink, p.route.source.as_path())),
        &config.root,
    );
    if conflicts.is_empty() {
        return Ok(());
    }

    print_conflicts(&conflicts);
    let total_sources: usize = conflicts.iter().map(|c| c.sources.len()).sum();
    bail!(
        "{} conflicting url{}, {} source{}",
        conflicts.len(),
        plural_s(conflicts.len()),
        total_sources,
        plural_s(total_sources)
    )
}

/// Check configured links (navbar, footer) and page body links.
///
/// A site-root link is valid when it names a composed page, a file of the
/// static directory, or a generated stylesheet, below `base_url`. Site-root
/// links outside `base_url` are broken. External, fragment and page-relative
/// links are not checked.
pub(crate) fn check_links(config: &SiteConfig, pages: &[RenderedPage]) -> LinkReport {
    let mut report = LinkReport::default();
    if !config.site.on_broken_links.is_enabled() {
        return report;
    }

    let targets = LinkTargets::new(config, pages);

    let config_source = config.root_relative(&config.config_path).display().to_string();
    let config_links = config
        .theme
        .navbar
        .items
        .iter()
        .flat_map(|item| item.links())
        .map(|link| (link, "navbar"))
        .chain(config.theme.footer.all_links().map(|link| (link, "footer")));
    for (link, context) in config_links {
        if !targets.contains(&link.target.resolve(&config.site.base_url)) {
            report.add(config_source.clone(), link.target.as_str().to_string(), Some(context));
        }
    }

    for page in pages {
        let broken: Vec<_> = page.links.iter().filter(|l| !targets.contains(l)).collect();
        if broken.is_empty() {
            continue;
        }
        let source = page.route.relative_source(config);
        for link in broken {
            report.add(source.clone(), link.clone(), None);
        }
    }

    report
}

/// Everything a site-root link may point at.
struct LinkTargets<'a> {
    base_url: &'a str,
    routes: FxHashSet<&'a UrlPath>,
    static_dir: &'a Path,
    /// Stylesheets the build writes, relative to the output root.
    stylesheets: Vec<String>,
}

impl<'a> LinkTargets<'a> {
    fn new(config: &'a SiteConfig, pages: &'a [RenderedPage]) -> Self {
        let mut stylesheets = vec![format!("{CSS_DIR}/{THEME_FILE}")];
        if config.preset.theme.custom_css.is_some() {
            stylesheets.push(format!("{CSS_DIR}/{CUSTOM_FILE}"));
        }
        Self {
            base_url: &config.site.base_url,
            routes: pages.iter().map(|p| &p.route.permalink).collect(),
            static_dir: &config.build.static_dir,
            stylesheets,
        }
    }

    fn contains(&self, link: &str) -> bool {
        let kind = LinkKind::parse(link);
        if !matches!(kind, LinkKind::SiteRoot(_)) {
            return true;
        }
        let Some(route) = kind.route(self.base_url) else {
            return false;
        };

        if self.routes.contains(&route) {
            return true;
        }
        let file = route.as_relative_file();
        self.stylesheets.iter().any(|css| css == file) || self.static_dir.join(file).is_file()
    }
}

/// React to broken links according to the site policy.
pub(crate) fn apply_policy(policy: BrokenLinkPolicy, report: &LinkReport) -> Result<()> {
    if report.is_empty() {
        return Ok(());
    }

    match policy {
        BrokenLinkPolicy::Ignore => Ok(()),
        BrokenLinkPolicy::Log => {
            for (source, links) in &report.broken {
                for link in links {
                    log!("links"; "{}: {}", source, link.target);
                }
            }
            Ok(())
        }
        BrokenLinkPolicy::Warn => {
            report.print();
            log!("warning"; "{}", report);
            Ok(())
        }
        BrokenLinkPolicy::Throw => {
            report.print();
            bail!(
                "{} in {}",
                plural_count(report.link_count(), "broken link"),
                plural_count(report.file_count(), "file")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use std::fs;
    use tempfile::TempDir;

    fn site(extra: &str) -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pages")).unwrap();
        fs::create_dir_all(root.join("static/img")).unwrap();
        fs::write(root.join("static/img/logo.svg"), "<svg/>").unwrap();
        fs::write(
            root.join("pages/about.html"),
            "<h1>About</h1><img src=\"/img/logo.svg\"><a href=\"/blog/\">Blog</a>\
             <a href=\"/nope/\">x</a><a href=\"#top\">top</a><a href=\"https://x.dev\">x</a>",
        )
        .unwrap();
        let config = test_site_config(root, extra);
        (dir, config)
    }

    fn compose(config: &SiteConfig) -> Vec<RenderedPage> {
        compose_site(config, &SiteContent::collect(config).unwrap())
    }

    #[test]
    fn test_page_links_checked() {
        let (_dir, config) = site("");
        let report = check_links(&config, &compose(&config));
        assert_eq!(report.link_count(), 1);
        assert_eq!(report.broken["pages/about.html"][0].target, "/nope/");
    }

    #[test]
    fn test_nav_links_checked() {
        let (_dir, config) = site(
            "[[theme.navbar.items]]\nlabel = \"Docs\"\nto = \"/docs\"\n\
             [[theme.navbar.items]]\nlabel = \"Blog\"\nto = \"/blog\"\n\
             [[theme.navbar.items]]\nlabel = \"GitHub\"\nhref = \"https://github.com\"",
        );
        let report = check_links(&config, &compose(&config));
        let nav: Vec<_> = report.broken["folio.toml"].iter().map(|l| l.target.as_str()).collect();
        assert_eq!(nav, ["/docs"]);
    }

    #[test]
    fn test_links_under_base_url() {
        let (_dir, config) = site(
            "base_url = \"/site/\"\n\
             [[theme.navbar.items]]\nlabel = \"AWS\"\nhref = \"/aws\"\n\
             [[theme.footer.links]]\ntitle = \"More\"\nitems = [{ label = \"Blog\", to = \"/blog\" }]",
        );
        let report = check_links(&config, &compose(&config));

        // `to` routes get the base prefix; a bare `href` path leaves the site
        let config_links: Vec<_> =
            report.broken["folio.toml"].iter().map(|l| l.target.as_str()).collect();
        assert_eq!(config_links, ["/aws"]);

        // body links without the base prefix point outside the site
        let mut body: Vec<_> = report.broken["pages/about.html"]
            .iter()
            .map(|l| l.target.as_str())
            .collect();
        body.sort_unstable();
        assert_eq!(body, ["/blog/", "/img/logo.svg", "/nope/"]);
    }

    #[test]
    fn test_only_generated_stylesheets_are_targets() {
        let (dir, config) = site("");
        fs::write(
            dir.path().join("pages/style.html"),
            "<link href=\"/assets/css/theme.css\"><link href=\"/assets/css/custom.css\">\
             <link href=\"/assets/css/typo.css\"><link href=\"/assets/cssnope\">",
        )
        .unwrap();
        let report = check_links(&config, &compose(&config));
        let broken: Vec<_> = report.broken["pages/style.html"]
            .iter()
            .map(|l| l.target.as_str())
            .collect();
        assert_eq!(broken, ["/assets/css/custom.css", "/assets/css/typo.css", "/assets/cssnope"]);

        fs::create_dir_all(dir.path().join("src/css")).unwrap();
        fs::write(dir.path().join("src/css/custom.css"), ".x{}").unwrap();
        let config = test_site_config(
            dir.path(),
            "[preset.theme]\ncustom_css = \"src/css/custom.css\"",
        );
        let report = check_links(&config, &compose(&config));
        let broken: Vec<_> = report.broken["pages/style.html"]
            .iter()
            .map(|l| l.target.as_str())
            .collect();
        assert_eq!(broken, ["/assets/css/typo.css", "/assets/cssnope"]);
    }

    #[test]
    fn test_ignore_policy_skips_checks() {
        let (_dir, config) = site("on_broken_links = \"ignore\"");
        assert!(check_links(&config, &compose(&config)).is_empty());
    }

    #[test]
    fn test_policy_outcomes() {
        let mut report = LinkReport::default();
        report.add("pages/a.html".into(), "/x/".into(), None);
        assert!(apply_policy(BrokenLinkPolicy::Throw, &report).is_err());
        assert!(apply_policy(BrokenLinkPolicy::Warn, &report).is_ok());
        assert!(apply_policy(BrokenLinkPolicy::Log, &report).is_ok());
        assert!(apply_policy(BrokenLinkPolicy::Throw, &LinkReport::default()).is_ok());
    }

    #[test]
    fn test_route_conflict_rejected() {
        let (dir, config) = site("");
        fs::write(dir.path().join("pages/index.html"), "<p>second home</p>").unwrap();
        let pages = compose(&config);
        assert!(ensure_unique_routes(&config, &pages).is_err());
    }
}
