//! Link classification utilities.

use crate::utils::path::route::{is_external_link, strip_base};

use super::UrlPath;

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /blog/hello).
    SiteRoot(&'a str),
    /// Page-relative path (./image.png, ../other).
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) || link.starts_with("//") {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }

    /// Route this link points at within a site served under `base_url`.
    ///
    /// Only site-root links have one. Links that leave `base_url` are not
    /// routes of this site and yield `None`.
    pub fn route(&self, base_url: &str) -> Option<UrlPath> {
        match self {
            Self::SiteRoot(link) => strip_base(base_url, link).map(UrlPath::from_link),
            _ => None,
        }
    }
}
