//! Presentational components and page composition.
//!
//! Every component is a pure function from configuration (plus page data)
//! to markup. Config-supplied text is escaped; only content fragments are
//! inserted verbatim.
//!
//! | Module     | Renders                                   |
//! |------------|-------------------------------------------|
//! | `hero`     | Landing page banner                       |
//! | `features` | Landing page feature columns              |
//! | `navbar`   | Top navigation                            |
//! | `footer`   | Footer links and copyright                |
//! | `blog`     | Blog listing and post article             |
//! | `layout`   | Document shell around a page body         |
//! | `compose`  | Whole pages, ready to write               |

pub mod blog;
pub mod compose;
pub mod features;
pub mod footer;
pub mod hero;
pub mod layout;
pub mod navbar;

pub use compose::{RenderedPage, SiteContent, compose_site};

use crate::config::NavTarget;
use crate::utils::html::{escape, escape_attr};
use crate::utils::path::route::is_external_link;

/// `<a>` element for a configured target.
///
/// External URLs open in a new tab without leaking the opener.
fn anchor(class: &str, target: &NavTarget, base_url: &str, label: &str) -> String {
    let href = target.resolve(base_url);
    let external = if is_external_link(&href) {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a class="{}" href="{}"{}>{}</a>"#,
        class,
        escape_attr(&href),
        external,
        escape(label)
    )
}
