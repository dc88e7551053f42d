//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Split a site URL into its origin and a `base_url` path.
///
/// Used by `--site-url`, which accepts a full deployment URL such as a
/// GitHub Pages project site. Returns `None` if the URL does not parse.
///
/// ```ignore
/// split_site_url("https://user.github.io/blog/") -> Some(("https://user.github.io", "/blog/"))
/// split_site_url("https://example.com")          -> Some(("https://example.com", "/"))
/// split_site_url("https://example.com:8080/a/b") -> Some(("https://example.com:8080", "/a/b/"))
/// ```
pub fn split_site_url(url_str: &str) -> Option<(String, String)> {
    let parsed = url::Url::parse(url_str).ok()?;
    let origin = parsed.origin().ascii_serialization();

    let path = parsed.path().trim_matches('/');
    let base_url = if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{path}/")
    };

    Some((origin, base_url))
}

/// Find the config file, walking upward from the current directory.
///
/// ```text
/// /home/user/site/blog/       ← cwd
/// /home/user/site/folio.toml  ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}
