//! Embedded static resources for folio.
//!
//! - `template` - Template types for typed variable injection
//! - `layout` - The HTML document shell every page is wrapped in
//! - `css` - The base stylesheet (minified at compile time by `build.rs`)
//! - `init` - Files written by `folio init`
//!
//! ```ignore
//! use embed::layout::{LAYOUT_HTML, LayoutVars};
//! let html = LAYOUT_HTML.render(&vars);
//! ```

mod template;

pub use template::{Template, TemplateVars, substitute};

pub mod layout {
    use super::{Template, TemplateVars, substitute};

    /// Variables for layout.html. Every value is inserted as-is, so callers
    /// pass already-escaped strings.
    pub struct LayoutVars<'a> {
        pub lang: &'a str,
        pub title: &'a str,
        pub code_theme: &'a str,
        pub code_theme_dark: &'a str,
        /// `<meta>`/`<link>` elements for `<head>`.
        pub head: &'a str,
        pub body_class: &'a str,
        pub navbar: &'a str,
        /// Page header before `<main>`, may be empty.
        pub header: &'a str,
        pub main: &'a str,
        pub footer: &'a str,
    }

    impl TemplateVars for LayoutVars<'_> {
        fn apply(&self, content: &str) -> String {
            substitute(
                content,
                &[
                    ("LANG", self.lang),
                    ("TITLE", self.title),
                    ("CODE_THEME", self.code_theme),
                    ("CODE_THEME_DARK", self.code_theme_dark),
                    ("HEAD", self.head),
                    ("BODY_CLASS", self.body_class),
                    ("NAVBAR", self.navbar),
                    ("HEADER", self.header),
                    ("MAIN", self.main),
                    ("FOOTER", self.footer),
                ],
            )
        }
    }

    /// Document shell for every page.
    pub const LAYOUT_HTML: Template<LayoutVars<'static>> =
        Template::new(include_str!("layout.html"));
}

pub mod css {
    /// Base theme stylesheet, minified by `build.rs`.
    pub const THEME_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/theme.min.css"));

    /// Output directory of stylesheets, relative to the output root.
    pub const CSS_DIR: &str = "assets/css";

    /// File name of the base theme in `CSS_DIR`.
    pub const THEME_FILE: &str = "theme.css";

    /// File name of the user stylesheet in `CSS_DIR`.
    pub const CUSTOM_FILE: &str = "custom.css";
}

pub mod init {
    /// Starter `folio.toml`.
    pub const CONFIG_TOML: &str = include_str!("init/folio.toml");
    /// Starter page, written to `pages/about.html`.
    pub const ABOUT_HTML: &str = include_str!("init/about.html");
    /// Starter post, written to `blog/<today>-welcome.html`.
    pub const WELCOME_HTML: &str = include_str!("init/welcome.html");
    /// Starter custom stylesheet.
    pub const CUSTOM_CSS: &str = include_str!("init/custom.css");
}
