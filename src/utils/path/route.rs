//! URL route utilities.
//!
//! Provides consistent URL handling across the codebase:
//! - Link type detection (external vs internal)
//! - Fragment and query splitting
//! - Joining site routes with the configured `base_url`

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts.
///
/// The fragment is an empty string if no `#` is found.
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

/// Strip `?query` and `#fragment` from a link, leaving the path.
#[inline]
pub fn strip_query_fragment(url: &str) -> &str {
    let (path, _) = split_path_fragment(url);
    path.split_once('?').map_or(path, |(p, _)| p)
}

/// Prefix a site-root route with `base_url`.
///
/// `base_url` always starts and ends with `/`, routes always start with `/`.
///
/// - `join_base("/", "/blog")` -> `/blog`
/// - `join_base("/docs-site/", "/blog")` -> `/docs-site/blog`
#[inline]
pub fn join_base(base_url: &str, route: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}{route}")
}

/// Strip `base_url` from a site-root link, returning the route it points at.
///
/// Returns `None` if the link lives outside `base_url`.
pub fn strip_base<'a>(base_url: &str, link: &'a str) -> Option<&'a str> {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return Some(link);
    }
    let rest = link.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
        assert_eq!(split_path_fragment("/about"), ("/about", ""));
        assert_eq!(split_path_fragment("#section"), ("", "section"));
    }

    #[test]
    fn test_strip_query_fragment() {
        assert_eq!(strip_query_fragment("/blog?page=2#top"), "/blog");
        assert_eq!(strip_query_fragment("/blog#top"), "/blog");
        assert_eq!(strip_query_fragment("/blog"), "/blog");
    }

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("/", "/blog"), "/blog");
        assert_eq!(join_base("/", "/"), "/");
        assert_eq!(join_base("/site/", "/blog"), "/site/blog");
        assert_eq!(join_base("/site/", "/"), "/site/");
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/", "/blog"), Some("/blog"));
        assert_eq!(strip_base("/site/", "/site/blog"), Some("/blog"));
        assert_eq!(strip_base("/site/", "/site"), Some("/"));
        assert_eq!(strip_base("/site/", "/site/"), Some("/"));
        assert_eq!(strip_base("/site/", "/other/blog"), None);
        assert_eq!(strip_base("/site/", "/sitemap"), None);
    }
}
