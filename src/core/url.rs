//! URL path type for type-safe route handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Links from HTML are decoded on input

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use percent_encoding::percent_decode_str;

use crate::utils::path::route::strip_query_fragment;

/// Decoded route of a page, relative to `base_url`.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts and ends with `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create a page route. Normalizes leading/trailing slashes and drops
    /// any query string or fragment.
    pub fn from_page(decoded: &str) -> Self {
        let path = strip_query_fragment(decoded.trim()).trim_matches('/');
        if path.is_empty() {
            return Self(Arc::from("/"));
        }
        Self(Arc::from(format!("/{path}/")))
    }

    /// Create from an `href` found in markup (percent-encoded).
    pub fn from_link(encoded: &str) -> Self {
        let path = strip_query_fragment(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_page(&decoded)
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.as_str() == "/"
    }

    /// Output HTML file under `output_dir`: `/blog/` -> `<output>/blog/index.html`.
    pub fn output_file(&self, output_dir: &Path) -> PathBuf {
        let relative = self.as_str().trim_matches('/');
        let dir = if relative.is_empty() {
            output_dir.to_path_buf()
        } else {
            output_dir.join(relative)
        };
        dir.join("index.html")
    }

    /// The path as a file below the static directory: `/img/logo.svg/` -> `img/logo.svg`.
    #[inline]
    pub fn as_relative_file(&self) -> &str {
        self.as_str().trim_matches('/')
    }
}

impl fmt::Display for UrlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page_normalizes_slashes() {
        assert_eq!(UrlPath::from_page("").as_str(), "/");
        assert_eq!(UrlPath::from_page("/").as_str(), "/");
        assert_eq!(UrlPath::from_page("blog").as_str(), "/blog/");
        assert_eq!(UrlPath::from_page("/blog").as_str(), "/blog/");
        assert_eq!(UrlPath::from_page("/blog/2022/").as_str(), "/blog/2022/");
    }

    #[test]
    fn test_from_page_strips_query_and_fragment() {
        assert_eq!(UrlPath::from_page("/about?x=1#team").as_str(), "/about/");
        assert_eq!(UrlPath::from_page("/#top").as_str(), "/");
    }

    #[test]
    fn test_from_link_decodes() {
        assert_eq!(
            UrlPath::from_link("/blog/caf%C3%A9#intro").as_str(),
            "/blog/café/"
        );
        // Invalid UTF-8 is kept as written
        assert_eq!(UrlPath::from_link("/a%FF").as_str(), "/a%FF/");
    }

    #[test]
    fn test_output_file() {
        let out = Path::new("/site/build");
        assert_eq!(
            UrlPath::from_page("/").output_file(out),
            Path::new("/site/build/index.html")
        );
        assert_eq!(
            UrlPath::from_page("/blog/2022/03/04/hello/").output_file(out),
            Path::new("/site/build/blog/2022/03/04/hello/index.html")
        );
    }

    #[test]
    fn test_relative_file() {
        assert_eq!(
            UrlPath::from_link("/img/logo.svg").as_relative_file(),
            "img/logo.svg"
        );
    }
}
