//! Content pages: HTML fragments from the pages and docs directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

use super::{FragmentInfo, PageKind, PageRoute};
use crate::config::SiteConfig;
use crate::core::UrlPath;

/// A page whose body is a hand-written HTML fragment.
#[derive(Debug, Clone)]
pub struct ContentPage {
    pub kind: PageKind,
    pub route: PageRoute,
    /// First `<h1>` of the fragment, or the file stem.
    pub title: String,
    /// Fragment markup, inserted into the layout verbatim.
    pub body: String,
}

/// Collect every enabled fragment section (pages, then docs).
pub fn collect_content(config: &SiteConfig) -> Result<Vec<ContentPage>> {
    let mut pages = Vec::new();

    let preset = &config.preset;
    if preset.pages.enable {
        pages.extend(collect_section(config, &preset.pages.path, "", PageKind::Page)?);
    }
    if preset.docs.enable {
        pages.extend(collect_section(
            config,
            &preset.docs.path,
            &preset.docs.route_base_path,
            PageKind::Doc,
        )?);
    }

    Ok(pages)
}

/// Collect `*.html` fragments below `dir`, mounted under `route_base`.
///
/// A missing directory yields no pages. Files and directories starting with
/// `_` are partials and never become pages.
pub fn collect_section(
    config: &SiteConfig,
    dir: &Path,
    route_base: &str,
    kind: PageKind,
) -> Result<Vec<ContentPage>> {
    collect_fragment_files(dir)
        .into_iter()
        .map(|path| {
            let body = fs::read_to_string(&path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            let permalink = fragment_route(dir, &path, route_base);
            let title = FragmentInfo::parse(&body)
                .title
                .unwrap_or_else(|| file_stem_title(&path));

            crate::debug!("content"; "{} -> {}", config.root_relative(&path).display(), permalink);

            Ok(ContentPage {
                kind,
                route: PageRoute::new(config, permalink, &path),
                title,
                body,
            })
        })
        .collect()
}

/// All `.html` files under `dir`, sorted, partials excluded.
pub fn collect_fragment_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .filter(|path| !is_partial(dir, path))
        .collect();
    files.sort();
    files
}

fn is_partial(dir: &Path, path: &Path) -> bool {
    path.strip_prefix(dir)
        .unwrap_or(path)
        .components()
        .any(|c| c.as_os_str().to_string_lossy().starts_with('_'))
}

/// `about.html` -> `/about/`, `guide/index.html` -> `/guide/`, then
/// mounted under `route_base`.
fn fragment_route(dir: &Path, path: &Path, route_base: &str) -> UrlPath {
    let relative = path.strip_prefix(dir).unwrap_or(path).with_extension("");

    let mut segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }

    let base = route_base.trim_matches('/');
    let route = std::iter::once(base)
        .chain(segments.iter().map(String::as_str))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    UrlPath::from_page(&route)
}

/// `getting-started.html` -> `getting-started`
fn file_stem_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if stem == "index" {
        path.parent()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(stem)
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_fragment_route() {
        let dir = Path::new("/site/pages");
        let route = |p: &str, base: &str| fragment_route(dir, &dir.join(p), base);
        assert_eq!(route("about.html", "").as_str(), "/about/");
        assert_eq!(route("index.html", "").as_str(), "/");
        assert_eq!(route("guide/index.html", "").as_str(), "/guide/");
        assert_eq!(route("guide/setup.html", "docs").as_str(), "/docs/guide/setup/");
        assert_eq!(route("index.html", "/docs/").as_str(), "/docs/");
    }

    #[test]
    fn test_file_stem_title() {
        assert_eq!(file_stem_title(Path::new("pages/about.html")), "about");
        assert_eq!(file_stem_title(Path::new("pages/guide/index.html")), "guide");
    }

    #[test]
    fn test_collect_section() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "about.html", "<h1>About me</h1><p>Hi</p>");
        write(dir.path(), "contact/index.html", "<p>no heading</p>");
        write(dir.path(), "_partial.html", "<p>skip</p>");
        write(dir.path(), "_drafts/post.html", "<p>skip</p>");
        write(dir.path(), "notes.txt", "skip");

        let config = test_parse_config("");
        let pages = collect_section(&config, dir.path(), "", PageKind::Page).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].title, "About me");
        assert_eq!(pages[0].route.permalink.as_str(), "/about/");
        assert_eq!(pages[1].title, "contact");
        assert_eq!(pages[1].route.permalink.as_str(), "/contact/");
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let config = test_parse_config("");
        let pages =
            collect_section(&config, Path::new("/nonexistent"), "", PageKind::Page).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_collect_content_respects_enable() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "pages/about.html", "<h1>About</h1>");
        write(dir.path(), "docs/intro.html", "<h1>Intro</h1>");

        let mut config = test_parse_config("");
        config.preset.normalize(dir.path());
        assert_eq!(collect_content(&config).unwrap().len(), 1);

        config.preset.docs.enable = true;
        let pages = collect_content(&config).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].kind, PageKind::Doc);
        assert_eq!(pages[1].route.permalink.as_str(), "/docs/intro/");
    }
}
