//! Blog listing and post pages.

use crate::config::{BlogPresetConfig, SiteConfig};
use crate::page::BlogPost;
use crate::utils::html::{escape, escape_attr};

/// Blog index: title, description, then one summary per post.
pub fn render_list(config: &SiteConfig, posts: &[BlogPost]) -> String {
    let blog = &config.preset.blog;
    let mut html = String::from("<div class=\"container content\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&blog.title)));
    if !blog.description.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", escape(&blog.description)));
    }

    if posts.is_empty() {
        html.push_str("<p>No posts yet.</p>\n");
    }
    for post in posts {
        html.push_str(&format!(
            "<article class=\"blog-post\">\n<h2><a href=\"{}\">{}</a></h2>\n{}<div class=\"blog-post__summary\">\n{}\n</div>\n",
            escape_attr(&post.route.href),
            escape(&post.title),
            render_meta(blog, post),
            post.summary.trim()
        ));
        if post.truncated {
            html.push_str(&format!(
                "<a class=\"blog-post__more\" href=\"{}\">Read more</a>\n",
                escape_attr(&post.route.href)
            ));
        }
        html.push_str("</article>\n");
    }

    html.push_str("</div>\n");
    html
}

/// A single post: title, date line, body and optional edit link.
pub fn render_post(config: &SiteConfig, post: &BlogPost) -> String {
    let blog = &config.preset.blog;
    let mut html = String::from("<article class=\"container content blog-post\">\n<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&post.title)));
    html.push_str(&render_meta(blog, post));
    html.push_str("</header>\n");
    html.push_str(post.body.trim());
    html.push('\n');
    if let Some(edit_url) = &blog.edit_url {
        html.push_str(&edit_link(edit_url, &post.route.relative_source(config)));
    }
    html.push_str("</article>\n");
    html
}

fn render_meta(blog: &BlogPresetConfig, post: &BlogPost) -> String {
    let reading = if blog.show_reading_time {
        format!(" · {} min read", post.reading_time)
    } else {
        String::new()
    };
    format!(
        "<div class=\"blog-post__meta\"><time datetime=\"{}\">{}</time>{}</div>\n",
        post.date,
        post.date.to_long(),
        reading
    )
}

/// "Edit this page" link: `edit_url` joined with the source path.
pub fn edit_link(edit_url: &str, relative_source: &str) -> String {
    let href = format!(
        "{}/{}",
        edit_url.trim_end_matches('/'),
        relative_source.trim_start_matches('/')
    );
    format!(
        "<a class=\"edit-this-page\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Edit this page</a>\n",
        escape_attr(&href)
    )
}
