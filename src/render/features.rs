//! Landing page feature columns.

use crate::config::HomeConfig;
use crate::utils::html::escape;

/// One column per feature card. Renders nothing without features.
pub fn render(home: &HomeConfig) -> String {
    if home.features.is_empty() {
        return String::new();
    }

    let columns: String = home
        .features
        .iter()
        .map(|feature| {
            let body = if feature.body.is_empty() {
                String::new()
            } else {
                format!("<p>{}</p>", escape(&feature.body))
            };
            format!(
                "<div class=\"col feature\">\n<h2>{}</h2>\n{}\n</div>\n",
                escape(&feature.title),
                body
            )
        })
        .collect();

    format!(
        "<section class=\"features\">\n<div class=\"container\">\n<div class=\"row\">\n{columns}</div>\n</div>\n</section>\n"
    )
}
