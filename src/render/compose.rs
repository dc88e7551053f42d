//! Whole pages: components arranged inside the layout shell.

use anyhow::Result;
use rayon::prelude::*;

use super::layout::{self, PageShell};
use super::{blog, features, hero};
use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::page::{
    BlogPost, ContentPage, PageKind, PageRoute, collect_content, collect_posts, extract_links,
};

/// A page ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub kind: PageKind,
    pub route: PageRoute,
    /// Complete document.
    pub html: String,
    /// `href`/`src` values of the page body, navbar and footer excluded.
    pub links: Vec<String>,
}

/// Everything read from the content directories.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub pages: Vec<ContentPage>,
    /// Newest first.
    pub posts: Vec<BlogPost>,
}

impl SiteContent {
    pub fn collect(config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            pages: collect_content(config)?,
            posts: collect_posts(config)?,
        })
    }

    /// Number of pages `compose_site` produces.
    pub fn page_count(&self, config: &SiteConfig) -> usize {
        let index = usize::from(config.preset.blog.enable);
        1 + self.pages.len() + index + self.posts.len()
    }
}

enum Job<'a> {
    Home,
    Content(&'a ContentPage),
    BlogIndex,
    Post(&'a BlogPost),
}

/// Compose every page of the site: home, content pages, blog index, posts.
///
/// Output order is stable, so the same input always yields the same pages.
pub fn compose_site(config: &SiteConfig, content: &SiteContent) -> Vec<RenderedPage> {
    let mut jobs = Vec::with_capacity(content.page_count(config));
    jobs.push(Job::Home);
    jobs.extend(content.pages.iter().map(Job::Content));
    if config.preset.blog.enable {
        jobs.push(Job::BlogIndex);
    }
    jobs.extend(content.posts.iter().map(Job::Post));

    jobs.par_iter()
        .map(|job| match job {
            Job::Home => compose_home(config),
            Job::Content(page) => compose_content(config, page),
            Job::BlogIndex => compose_blog_index(config, &content.posts),
            Job::Post(post) => compose_post(config, post),
        })
        .collect()
}

fn compose_home(config: &SiteConfig) -> RenderedPage {
    let home = &config.home;
    let route = PageRoute::new(config, UrlPath::from_page("/"), &config.config_path);
    finish(
        config,
        PageKind::Home,
        route,
        &home.title,
        &home.description,
        Body {
            header: hero::render(&config.site, home),
            main: features::render(home),
        },
    )
}

fn compose_content(config: &SiteConfig, page: &ContentPage) -> RenderedPage {
    let mut main = format!("<div class=\"container content\">\n{}\n", page.body.trim());
    if page.kind == PageKind::Doc
        && let Some(edit_url) = &config.preset.docs.edit_url
    {
        main.push_str(&blog::edit_link(
            edit_url,
            &page.route.relative_source(config),
        ));
    }
    main.push_str("</div>\n");
    finish(config, page.kind, page.route.clone(), &page.title, "", Body::main(main))
}

fn compose_blog_index(config: &SiteConfig, posts: &[BlogPost]) -> RenderedPage {
    let blog = &config.preset.blog;
    let permalink = UrlPath::from_page(&blog.index_route());
    let route = PageRoute::new(config, permalink, &config.config_path);
    let main = blog::render_list(config, posts);
    finish(config, PageKind::BlogIndex, route, &blog.title, &blog.description, Body::main(main))
}

fn compose_post(config: &SiteConfig, post: &BlogPost) -> RenderedPage {
    let main = blog::render_post(config, post);
    finish(config, post.kind(), post.route.clone(), &post.title, "", Body::main(main))
}

/// Page markup: an optional header before `<main>`, then the main content.
struct Body {
    header: String,
    main: String,
}

impl Body {
    fn main(main: String) -> Self {
        Self {
            header: String::new(),
            main,
        }
    }
}

fn finish(
    config: &SiteConfig,
    kind: PageKind,
    route: PageRoute,
    title: &str,
    description: &str,
    body: Body,
) -> RenderedPage {
    let description = if description.is_empty() {
        config.site.tagline.as_str()
    } else {
        description
    };
    let html = layout::render(
        config,
        &PageShell {
            kind,
            title,
            description,
            route: &route.permalink,
            header: &body.header,
            main: &body.main,
        },
    );

    crate::debug!("compose"; "{} ({} bytes)", route.permalink, html.len());

    RenderedPage {
        kind,
        links: extract_links(&body.header)
            .into_iter()
            .chain(extract_links(&body.main))
            .collect(),
        route,
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site(dir: &TempDir, extra: &str) -> SiteConfig {
        let root = dir.path();
        fs::create_dir_all(root.join("pages/guide")).unwrap();
        fs::create_dir_all(root.join("blog")).unwrap();
        fs::write(root.join("pages/about.html"), "<h1>About me</h1><p>Hi.</p>").unwrap();
        fs::write(root.join("pages/guide/index.html"), "<p>No heading</p>").unwrap();
        fs::write(
            root.join("blog/2022-03-04-aws-amplify.html"),
            "<h1>AWS Amplify</h1><p>Intro <a href=\"/about/\">about</a></p>\n<!-- truncate -->\n<p>More.</p>",
        )
        .unwrap();

        crate::config::test_site_config(root, extra)
    }

    fn compose(config: &SiteConfig) -> Vec<RenderedPage> {
        let content = SiteContent::collect(config).unwrap();
        assert_eq!(content.page_count(config), 5);
        compose_site(config, &content)
    }

    fn find<'a>(pages: &'a [RenderedPage], route: &str) -> &'a RenderedPage {
        pages
            .iter()
            .find(|p| p.route.permalink.as_str() == route)
            .unwrap_or_else(|| panic!("no page at {route}"))
    }

    #[test]
    fn test_compose_all_kinds() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "");
        let pages = compose(&config);

        let kinds: Vec<_> = pages.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            [
                PageKind::Home,
                PageKind::Page,
                PageKind::Page,
                PageKind::BlogIndex,
                PageKind::BlogPost
            ]
        );

        let home = find(&pages, "/");
        assert!(home.html.contains("<title>Hello from Test</title>"));
        assert!(home.html.contains("class=\"hero__title\">Test</h1>"));

        let about = find(&pages, "/about/");
        assert!(about.html.contains("<title>About me | Test</title>"));
        assert_eq!(find(&pages, "/guide/").route.permalink.as_str(), "/guide/");

        let index = find(&pages, "/blog/");
        assert!(index.html.contains("<p>Intro"));
        assert!(!index.html.contains("More."));

        let post = find(&pages, "/blog/2022/03/04/aws-amplify/");
        assert!(post.html.contains("More."));
        assert_eq!(post.links, ["/about/"]);
    }

    #[test]
    fn test_home_hero_precedes_main() {
        let dir = TempDir::new().unwrap();
        let config = site(
            &dir,
            "[home.cta]\nlabel = \"Read\"\nto = \"/blog\"\n[[home.features]]\ntitle = \"Why?\"",
        );
        let pages = compose(&config);
        let home = find(&pages, "/");

        let hero = home.html.find("<header class=\"hero hero--primary\">").unwrap();
        let main = home.html.find("<main class=\"main-wrapper\">").unwrap();
        let features = home.html.find("<section class=\"features\">").unwrap();
        assert!(hero < main && main < features);
        assert_eq!(home.links, ["/blog"]);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "");
        let first: Vec<_> = compose(&config).into_iter().map(|p| p.html).collect();
        let second: Vec<_> = compose(&config).into_iter().map(|p| p.html).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_text_is_escaped() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir, "tagline = \"<script>alert(1)</script>\"");
        let pages = compose(&config);
        let home = find(&pages, "/");
        assert!(!home.html.contains("<script>"));
        assert!(home.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_doc_edit_link() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/intro.html"), "<h1>Intro</h1>").unwrap();
        let config = site(
            &dir,
            "[preset.docs]\nenable = true\nedit_url = \"https://github.com/o/r/edit/main/\"",
        );

        let content = SiteContent::collect(&config).unwrap();
        let pages = compose_site(&config, &content);
        let doc = find(&pages, "/docs/intro/");
        assert_eq!(doc.kind, PageKind::Doc);
        assert!(doc.html.contains("href=\"https://github.com/o/r/edit/main/docs/intro.html\""));
    }
}
