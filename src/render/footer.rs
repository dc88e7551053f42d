//! Page footer.

use super::anchor;
use crate::config::FooterConfig;
use crate::utils::html::escape;

/// Footer with link columns and the copyright line. Empty parts are omitted.
pub fn render(footer: &FooterConfig, base_url: &str) -> String {
    let mut html = format!(
        "<footer class=\"footer footer--{}\">\n<div class=\"container\">\n",
        footer.style.as_str()
    );

    if !footer.links.is_empty() {
        html.push_str("<div class=\"footer__links\">\n");
        for column in &footer.links {
            let items: String = column
                .items
                .iter()
                .map(|link| {
                    format!(
                        "<li class=\"footer__item\">{}</li>\n",
                        anchor("footer__link-item", &link.target, base_url, &link.label)
                    )
                })
                .collect();
            html.push_str(&format!(
                "<div class=\"footer__col\">\n<div class=\"footer__title\">{}</div>\n<ul class=\"footer__items\">\n{}</ul>\n</div>\n",
                escape(&column.title),
                items
            ));
        }
        html.push_str("</div>\n");
    }

    if !footer.copyright.is_empty() {
        html.push_str(&format!(
            "<div class=\"footer__copyright\">{}</div>\n",
            escape(&footer.copyright)
        ));
    }

    html.push_str("</div>\n</footer>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_footer_columns_and_copyright() {
        let config = test_parse_config(
            r#"[theme.footer]
style = "light"
copyright = "Copyright © 2022 FullsApps"

[[theme.footer.links]]
title = "Community"
items = [{ label = "GitHub", href = "https://github.com/peterdyer7" }, { label = "Blog", to = "/blog" }]"#,
        );
        let html = render(&config.theme.footer, "/");
        assert!(html.starts_with("<footer class=\"footer footer--light\">"));
        assert!(html.contains("<div class=\"footer__title\">Community</div>"));
        assert_eq!(html.matches("<li class=\"footer__item\">").count(), 2);
        assert!(html.contains("<div class=\"footer__copyright\">Copyright © 2022 FullsApps</div>"));
    }

    #[test]
    fn test_empty_footer() {
        let config = test_parse_config("");
        let html = render(&config.theme.footer, "/");
        assert!(html.starts_with("<footer class=\"footer footer--dark\">"));
        assert!(!html.contains("footer__links"));
        assert!(!html.contains("footer__copyright"));
    }
}
