//! Page route - source to output path mapping.

use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::core::UrlPath;

/// Source -> output path mapping for a page
///
/// # Example
///
/// ```text
/// Source: blog/2022-03-04-hello.html
///
/// PageRoute {
///     source:      /site/blog/2022-03-04-hello.html
///     permalink:   /blog/2022/03/04/hello/
///     output_file: /site/build/blog/2022/03/04/hello/index.html
///     href:        /blog/2022/03/04/hello/        (base_url "/")
///     full_url:    https://example.com/blog/2022/03/04/hello/
/// }
/// ```
///
/// Pages produced from configuration alone (home, blog index) use the
/// config file as their source.
#[derive(Debug, Clone)]
pub struct PageRoute {
    /// Source file path
    pub source: PathBuf,
    /// Route relative to `base_url`
    pub permalink: UrlPath,
    /// Output HTML file
    pub output_file: PathBuf,
    /// Link to this page as rendered in markup (`base_url` applied)
    pub href: String,
    /// Full URL including origin
    pub full_url: String,
}

impl PageRoute {
    pub fn new(config: &SiteConfig, permalink: UrlPath, source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            output_file: permalink.output_file(&config.build.output),
            href: crate::utils::path::route::join_base(&config.site.base_url, permalink.as_str()),
            full_url: config.site.absolute_url(permalink.as_str()),
            permalink,
        }
    }

    /// Source path relative to the site root, for logs and edit links.
    pub fn relative_source(&self, config: &SiteConfig) -> String {
        config
            .root_relative(&self.source)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
