//! Landing page banner.

use super::anchor;
use crate::config::{HomeConfig, SiteInfoConfig};
use crate::utils::html::escape;

/// Banner with the site title, tagline and optional call to action.
///
/// ```html
/// <header class="hero hero--primary">
///   <div class="container">
///     <h1 class="hero__title">FullsApps</h1>
///     <p class="hero__subtitle">Fullstack Applications development</p>
///     <div class="buttons">...</div>
///   </div>
/// </header>
/// ```
pub fn render(site: &SiteInfoConfig, home: &HomeConfig) -> String {
    let mut html = String::with_capacity(256);
    html.push_str("<header class=\"hero hero--primary\">\n<div class=\"container\">\n");
    html.push_str(&format!(
        "<h1 class=\"hero__title\">{}</h1>\n",
        escape(&site.title)
    ));
    html.push_str(&format!(
        "<p class=\"hero__subtitle\">{}</p>\n",
        escape(&site.tagline)
    ));

    if let Some(cta) = &home.cta {
        let button = match &cta.target {
            Some(target) => anchor(
                "button button--secondary button--lg",
                target,
                &site.base_url,
                &cta.label,
            ),
            None => escape(&cta.label).into_owned(),
        };
        html.push_str(&format!("<div class=\"buttons\">{button}</div>\n"));
    }

    html.push_str("</div>\n</header>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_exact_title_and_tagline() {
        let mut config = test_parse_config("tagline = \"Fullstack Applications development\"");
        config.site.title = "FullsApps".into();

        let html = render(&config.site, &config.home);
        assert!(html.starts_with("<header class=\"hero hero--primary\">"));
        assert!(html.contains("<h1 class=\"hero__title\">FullsApps</h1>"));
        assert!(
            html.contains("<p class=\"hero__subtitle\">Fullstack Applications development</p>")
        );
        assert!(!html.contains("buttons"));
    }

    #[test]
    fn test_subtitle_kept_without_tagline() {
        let config = test_parse_config("");
        let html = render(&config.site, &config.home);
        assert!(html.contains("<p class=\"hero__subtitle\"></p>"));
    }

    #[test]
    fn test_title_escaped() {
        let mut config = test_parse_config("");
        config.site.title = "<script>alert(1)</script>".into();
        let html = render(&config.site, &config.home);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_cta_link_and_text() {
        let config = test_parse_config("[home.cta]\nlabel = \"Read\"\nto = \"/blog\"");
        let html = render(&config.site, &config.home);
        assert!(html.contains(
            "<div class=\"buttons\"><a class=\"button button--secondary button--lg\" href=\"/blog\">Read</a></div>"
        ));

        let config = test_parse_config("[home.cta]\nlabel = \"Tutorial - 5min ⏱️\"");
        let html = render(&config.site, &config.home);
        assert!(html.contains("<div class=\"buttons\">Tutorial - 5min ⏱️</div>"));
    }

    #[test]
    fn test_deterministic() {
        let config = test_parse_config("tagline = \"t\"\n[home.cta]\nlabel = \"Go\"\nhref = \"/x\"");
        assert_eq!(
            render(&config.site, &config.home),
            render(&config.site, &config.home)
        );
    }
}
