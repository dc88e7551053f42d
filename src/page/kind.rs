//! Page kinds.

/// What produced a page. Drives the layout chrome and progress counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Landing page built from `[home]`.
    Home,
    /// Fragment from the pages directory.
    Page,
    /// Fragment from the docs directory.
    Doc,
    /// Blog listing.
    BlogIndex,
    /// Single blog post.
    BlogPost,
}

impl PageKind {
    /// Progress counter this kind is tallied under.
    pub const fn counter(self) -> &'static str {
        match self {
            Self::Home | Self::Page => "pages",
            Self::Doc => "docs",
            Self::BlogIndex | Self::BlogPost => "blog",
        }
    }
}
