//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Collect** - Read pages, docs and blog fragments
//! - **Compose** - Render every page in memory (parallel)
//! - **Check** - Route conflicts and broken links, before anything is written
//! - **Write** - Clean output, static files, stylesheets, pages

mod write;

use anyhow::{Context, Result};

use crate::cli::validate::{apply_policy, check_links, ensure_unique_routes};
use crate::config::SiteConfig;
use crate::log;
use crate::render::{SiteContent, compose_site};
use crate::utils::plural_count;

/// Build the entire site.
///
/// Pipeline: collect -> compose -> check -> write
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let content = SiteContent::collect(config)?;
    crate::debug!(
        "build";
        "{}, {}",
        plural_count(content.pages.len(), "page"),
        plural_count(content.posts.len(), "post")
    );

    let pages = compose_site(config, &content);

    ensure_unique_routes(config, &pages).context("build aborted, nothing was written")?;
    let report = check_links(config, &pages);
    apply_policy(config.site.on_broken_links, &report)
        .context("build aborted, nothing was written")?;

    write::write_site(config, &pages)?;

    log!(
        "build";
        "done: {} in '{}'",
        plural_count(pages.len(), "page"),
        config.root_relative(&config.build.output).display()
    );
    Ok(())
}
