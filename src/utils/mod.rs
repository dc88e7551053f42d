//! Shared helpers with no side effects.
//!
//! - [`date`]: UTC dates (blog filenames, copyright year)
//! - [`html`]: HTML escaping
//! - [`path`]: filesystem paths and URL routes
//! - [`plural`]: count formatting for log lines
//! - [`slug`]: URL slugs

pub mod date;
pub mod html;
pub mod path;
pub mod plural;
pub mod slug;

pub use plural::{plural_count, plural_s};
