//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module   | TOML Section | Purpose                                   |
//! |----------|--------------|-------------------------------------------|
//! | `site`   | `[site]`     | Identity, URLs, broken link policy        |
//! | `preset` | `[preset]`   | Content sources: pages, blog, docs, css   |
//! | `theme`  | `[theme]`    | Navbar, footer, code highlighting         |
//! | `home`   | `[home]`     | Landing page: title, call to action, cards|
//! | `build`  | `[build]`    | Output and static directories, minify     |

pub mod build;
pub mod home;
pub mod preset;
pub mod site;
pub mod theme;

pub use build::BuildSectionConfig;
pub use home::{CallToAction, Feature, HomeConfig};
pub use preset::{
    BlogPresetConfig, DocsPresetConfig, FeedOptions, FeedType, PagesPresetConfig,
    PresetSectionConfig, PresetThemeConfig,
};
pub use site::{BrokenLinkPolicy, SiteInfoConfig};
pub use theme::{
    CodeTheme, FooterColumn, FooterConfig, FooterStyle, NavItem, NavLink, NavPosition, NavTarget,
    NavbarConfig, NavbarLogo, PrismConfig, ThemeSectionConfig,
};
