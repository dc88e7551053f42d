//! Document shell: `<head>`, navbar, `<main>`, footer.

use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::embed::css::{CSS_DIR, CUSTOM_FILE, THEME_FILE};
use crate::embed::layout::{LAYOUT_HTML, LayoutVars};
use crate::page::PageKind;
use crate::utils::html::{escape, escape_attr};
use crate::utils::path::route::join_base;

use super::{footer, navbar};

/// What a page contributes to the shell.
pub struct PageShell<'a> {
    pub kind: PageKind,
    /// Page title. The home page passes `home.title` and it is used alone;
    /// other pages get `"{title} | {site}"`.
    pub title: &'a str,
    pub description: &'a str,
    /// Route of the page, for the active navbar link and canonical URL.
    pub route: &'a UrlPath,
    /// Markup between the navbar and `<main>`, such as the home hero.
    pub header: &'a str,
    /// Markup inside `<main>`.
    pub main: &'a str,
}

/// Wrap a page body in the document shell.
pub fn render(config: &SiteConfig, shell: &PageShell<'_>) -> String {
    let title = match shell.kind {
        PageKind::Home => shell.title.to_string(),
        _ if shell.title.is_empty() => config.site.title.clone(),
        _ => format!("{} | {}", shell.title, config.site.title),
    };

    let head = render_head(config, shell);
    let navbar = navbar::render(config, shell.route);
    let footer = footer::render(&config.theme.footer, &config.site.base_url);
    let prism = &config.theme.prism;

    LAYOUT_HTML.render(&LayoutVars {
        lang: &escape_attr(&config.site.language),
        title: &escape(&title),
        code_theme: prism.theme.as_str(),
        code_theme_dark: prism.dark_theme.as_str(),
        head: &head,
        body_class: body_class(shell.kind),
        navbar: &navbar,
        header: shell.header,
        main: shell.main,
        footer: &footer,
    })
}

fn render_head(config: &SiteConfig, shell: &PageShell<'_>) -> String {
    let base_url = &config.site.base_url;
    let mut head = Vec::new();

    if !shell.description.is_empty() {
        head.push(format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_attr(shell.description)
        ));
    }
    if !config.site.url.is_empty() {
        head.push(format!(
            "<link rel=\"canonical\" href=\"{}\">",
            escape_attr(&config.site.absolute_url(shell.route.as_str()))
        ));
    }
    if let Some(favicon) = &config.site.favicon {
        let href = join_base(
            base_url,
            &format!("/{}", favicon.to_string_lossy().trim_start_matches('/')),
        );
        head.push(format!(
            "<link rel=\"icon\" href=\"{}\">",
            escape_attr(&href)
        ));
    }

    head.push(stylesheet(base_url, THEME_FILE));
    if config.preset.theme.custom_css.is_some() {
        head.push(stylesheet(base_url, CUSTOM_FILE));
    }

    head.join("\n")
}

fn stylesheet(base_url: &str, file: &str) -> String {
    let href = join_base(base_url, &format!("/{CSS_DIR}/{file}"));
    format!("<link rel=\"stylesheet\" href=\"{}\">", escape_attr(&href))
}

const fn body_class(kind: PageKind) -> &'static str {
    match kind {
        PageKind::Home => "page-home",
        PageKind::Page => "page-content",
        PageKind::Doc => "page-doc",
        PageKind::BlogIndex => "page-blog-list",
        PageKind::BlogPost => "page-blog-post",
    }
}
