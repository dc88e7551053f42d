//! Core types - pure abstractions shared across the codebase.

pub mod conflict;
mod link;
mod url;

pub use link::LinkKind;
pub use url::UrlPath;
