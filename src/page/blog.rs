//! Blog posts: dated HTML fragments.
//!
//! ```text
//! blog/
//! ├── 2022-03-04-aws-amplify.html          -> /blog/2022/03/04/aws-amplify/
//! └── 2022-04-01-graphql/index.html        -> /blog/2022/04/01/graphql/
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::source::collect_fragment_files;
use super::links::strip_first_heading;
use super::{FragmentInfo, PageKind, PageRoute};
use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::log;
use crate::utils::date::Date;
use crate::utils::slug::slugify;

/// Marker separating the listing summary from the rest of a post.
pub const TRUNCATE_MARKER: &str = "<!-- truncate -->";

const WORDS_PER_MINUTE: usize = 200;

static POST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})-(.+)$").unwrap());

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub route: PageRoute,
    pub date: Date,
    pub slug: String,
    pub title: String,
    /// Fragment markup without its title heading.
    pub body: String,
    /// Markup before the truncate marker, or the whole body. No title heading.
    pub summary: String,
    /// Whether `summary` is shorter than `body`.
    pub truncated: bool,
    /// Estimated minutes to read, at least 1.
    pub reading_time: usize,
}

impl BlogPost {
    pub const fn kind(&self) -> PageKind {
        PageKind::BlogPost
    }
}

/// Collect blog posts, newest first.
///
/// Files whose name does not start with a valid `YYYY-MM-DD-` date are
/// skipped with a warning.
pub fn collect_posts(config: &SiteConfig) -> Result<Vec<BlogPost>> {
    let blog = &config.preset.blog;
    if !blog.enable {
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    for path in collect_fragment_files(&blog.path) {
        let Some((date, slug)) = parse_post_name(&path) else {
            log!("warning"; "skipping '{}': blog posts are named YYYY-MM-DD-slug.html",
                config.root_relative(&path).display());
            continue;
        };

        let body = fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        posts.push(build_post(config, &path, date, slug, body));
    }

    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    Ok(posts)
}

fn build_post(config: &SiteConfig, path: &Path, date: Date, slug: String, body: String) -> BlogPost {
    let info = FragmentInfo::parse(&body);
    let title = info.title.unwrap_or_else(|| slug.replace('-', " "));

    let body = strip_first_heading(&body);
    let (summary, truncated) = match body.split_once(TRUNCATE_MARKER) {
        Some((summary, _)) => (summary.trim_end().to_string(), true),
        None => (body.clone(), false),
    };

    let permalink = UrlPath::from_page(&format!(
        "{}/{:04}/{:02}/{:02}/{}",
        config.preset.blog.route_base_path.trim_matches('/'),
        date.year,
        date.month,
        date.day,
        slug
    ));

    BlogPost {
        route: PageRoute::new(config, permalink, path),
        date,
        slug,
        title,
        summary,
        truncated,
        reading_time: reading_time(info.words),
        body,
    }
}

/// Date and slug from `2022-03-04-hello.html` or `2022-03-04-hello/index.html`.
fn parse_post_name(path: &Path) -> Option<(Date, String)> {
    let stem = path.file_stem()?.to_str()?;
    let name = if stem == "index" {
        path.parent()?.file_name()?.to_str()?
    } else {
        stem
    };

    let caps = POST_NAME.captures(name)?;
    let date = Date::parse(&caps[1])?;
    let slug = slugify(&caps[2]);
    (!slug.is_empty()).then_some((date, slug))
}

/// Minutes at 200 words per minute, rounded up, never below 1.
pub fn reading_time(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
