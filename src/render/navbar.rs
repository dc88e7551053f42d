//! Top navigation bar.

use super::anchor;
use crate::config::{NavItem, NavLink, NavPosition, NavTarget, SiteConfig};
use crate::core::UrlPath;
use crate::utils::html::{escape, escape_attr};
use crate::utils::path::route::{is_external_link, join_base};

/// Navbar: brand, then items split into left and right groups.
///
/// Each configured item becomes exactly one `<li class="navbar__item">`,
/// dropdowns included.
pub fn render(config: &SiteConfig, current: &UrlPath) -> String {
    let navbar = &config.theme.navbar;
    let base_url = &config.site.base_url;

    let (left, right): (Vec<&NavItem>, Vec<&NavItem>) = navbar
        .items
        .iter()
        .partition(|item| item.position() == NavPosition::Left);

    let mut html = String::with_capacity(512);
    html.push_str("<nav class=\"navbar\" aria-label=\"Main\">\n");
    html.push_str("<div class=\"navbar__items\">\n");
    html.push_str(&render_brand(config));
    html.push_str(&render_group(&left, base_url, current, ""));
    html.push_str("</div>\n");
    html.push_str(&render_group(&right, base_url, current, " navbar__items--right"));
    html.push_str("</nav>\n");
    html
}

fn render_brand(config: &SiteConfig) -> String {
    let navbar = &config.theme.navbar;
    let base_url = &config.site.base_url;
    let title = navbar.title.as_deref().unwrap_or(&config.site.title);

    let logo = navbar
        .logo
        .as_ref()
        .map(|logo| {
            let src = if is_external_link(&logo.src) {
                logo.src.clone()
            } else {
                join_base(base_url, &format!("/{}", logo.src.trim_start_matches('/')))
            };
            format!(
                "<img class=\"navbar__logo\" src=\"{}\" alt=\"{}\">",
                escape_attr(&src),
                escape_attr(&logo.alt)
            )
        })
        .unwrap_or_default();

    let title = if title.is_empty() {
        String::new()
    } else {
        format!("<b class=\"navbar__title\">{}</b>", escape(title))
    };

    format!(
        "<a class=\"navbar__brand\" href=\"{}\">{}{}</a>\n",
        escape_attr(base_url),
        logo,
        title
    )
}

fn render_group(items: &[&NavItem], base_url: &str, current: &UrlPath, modifier: &str) -> String {
    if items.is_empty() {
        return String::new();
    }

    let entries: String = items
        .iter()
        .map(|item| render_item(item, base_url, current))
        .collect();
    format!("<ul class=\"navbar__items{modifier}\">\n{entries}</ul>\n")
}

fn render_item(item: &NavItem, base_url: &str, current: &UrlPath) -> String {
    match item {
        NavItem::Link { link, .. } => {
            let class = if is_active(link, current) {
                "navbar__link navbar__link--active"
            } else {
                "navbar__link"
            };
            format!(
                "<li class=\"navbar__item\">{}</li>\n",
                anchor(class, &link.target, base_url, &link.label)
            )
        }
        NavItem::Dropdown { label, items, .. } => {
            let links: String = items
                .iter()
                .map(|link| {
                    format!(
                        "<li>{}</li>\n",
                        anchor("dropdown__link", &link.target, base_url, &link.label)
                    )
                })
                .collect();
            format!(
                "<li class=\"navbar__item dropdown\">\n<span class=\"navbar__link\" tabindex=\"0\">{}</span>\n<ul class=\"dropdown__menu\">\n{}</ul>\n</li>\n",
                escape(label),
                links
            )
        }
    }
}

/// A route link is active on its own page and, except for the site root,
/// on every page below it.
fn is_active(link: &NavLink, current: &UrlPath) -> bool {
    let NavTarget::Route(to) = &link.target else {
        return false;
    };
    let route = UrlPath::from_page(to);
    if route.is_root() {
        current.is_root()
    } else {
        current.as_str().starts_with(route.as_str())
    }
}
