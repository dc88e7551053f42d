//! Page sources: what gets rendered, and where it ends up.
//!
//! | Module   | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `kind`   | Page kinds                                      |
//! | `route`  | Source -> permalink -> output file              |
//! | `links`  | Fragment facts (title, words) and link scanning |
//! | `source` | Pages and docs fragments                        |
//! | `blog`   | Dated blog posts                                |

mod blog;
mod kind;
mod links;
mod route;
mod source;

pub use blog::{BlogPost, TRUNCATE_MARKER, collect_posts};
pub use kind::PageKind;
pub use links::{FragmentInfo, extract_links};
pub use route::PageRoute;
pub use source::{ContentPage, collect_content};
