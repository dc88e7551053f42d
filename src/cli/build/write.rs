//! Write phase: output directory, static files, stylesheets, pages.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jwalk::WalkDir;
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::embed::css::{CSS_DIR, CUSTOM_FILE, THEME_CSS, THEME_FILE};
use crate::log;
use crate::logger::ProgressLine;
use crate::page::PageKind;
use crate::render::RenderedPage;

/// Write every composed page plus static files and stylesheets.
pub fn write_site(config: &SiteConfig, pages: &[RenderedPage]) -> Result<()> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let copied = copy_static(&config.build.static_dir, output)?;
    crate::debug!("build"; "copied {} static files", copied);

    write_stylesheets(config, output)?;
    write_pages(pages)
}

/// Ensure the output directory exists, emptied first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("failed to clear output directory '{}'", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory '{}'", output.display()))
}

/// Mirror the static directory into the output root. Returns the file count.
fn copy_static(static_dir: &Path, output: &Path) -> Result<usize> {
    if !static_dir.is_dir() {
        return Ok(0);
    }

    let files: Vec<_> = WalkDir::new(static_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .collect();

    files.par_iter().try_for_each(|src| {
        let relative = src.strip_prefix(static_dir).unwrap_or(src);
        let dest = output.join(relative);
        ensure_parent(&dest)?;
        fs::copy(src, &dest)
            .with_context(|| format!("failed to copy '{}'", src.display()))?;
        Ok::<_, anyhow::Error>(())
    })?;

    Ok(files.len())
}

/// Embedded theme stylesheet, then the user stylesheet if configured.
fn write_stylesheets(config: &SiteConfig, output: &Path) -> Result<()> {
    let css_dir = output.join(CSS_DIR);
    fs::create_dir_all(&css_dir)
        .with_context(|| format!("failed to create '{}'", css_dir.display()))?;

    let theme = css_dir.join(THEME_FILE);
    fs::write(&theme, THEME_CSS)
        .with_context(|| format!("failed to write '{}'", theme.display()))?;

    let Some(custom) = &config.preset.theme.custom_css else {
        return Ok(());
    };
    let source = fs::read_to_string(custom)
        .with_context(|| format!("failed to read '{}'", custom.display()))?;
    let css = if config.build.minify {
        minify_css(&source).with_context(|| format!("invalid stylesheet '{}'", custom.display()))?
    } else {
        source
    };

    let dest = css_dir.join(CUSTOM_FILE);
    fs::write(&dest, css).with_context(|| format!("failed to write '{}'", dest.display()))
}

/// Minify CSS source code.
fn minify_css(source: &str) -> Result<String> {
    let stylesheet =
        StyleSheet::parse(source, ParserOptions::default()).map_err(|e| anyhow!("{e}"))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|e| anyhow!("{e}"))?;
    Ok(result.code)
}

/// Write pages in parallel behind a progress line.
fn write_pages(pages: &[RenderedPage]) -> Result<()> {
    let count = |counter: &str| {
        pages
            .iter()
            .filter(|p| p.kind.counter() == counter)
            .count()
    };
    let progress = ProgressLine::new(&[
        ("pages", count(PageKind::Page.counter())),
        ("docs", count(PageKind::Doc.counter())),
        ("blog", count(PageKind::BlogPost.counter())),
    ]);

    pages.par_iter().try_for_each(|page| {
        let dest = &page.route.output_file;
        ensure_parent(dest)?;
        fs::write(dest, &page.html)
            .with_context(|| format!("failed to write '{}'", dest.display()))?;
        progress.inc(page.kind.counter());
        Ok::<_, anyhow::Error>(())
    })?;

    progress.finish();
    if pages.is_empty() {
        log!("warning"; "no pages were written");
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_minify_css() {
        let css = minify_css(".hero {\n  color: #ff0000;\n}\n").unwrap();
        assert_eq!(css, ".hero{color:red}");
    }

    #[test]
    fn test_copy_static_nested() {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        fs::create_dir_all(static_dir.join("img")).unwrap();
        fs::write(static_dir.join("img/logo.svg"), "<svg/>").unwrap();
        fs::write(static_dir.join("CNAME"), "fullsapps.com").unwrap();

        let out = dir.path().join("build");
        assert_eq!(copy_static(&static_dir, &out).unwrap(), 2);
        assert!(out.join("img/logo.svg").is_file());
        assert_eq!(fs::read_to_string(out.join("CNAME")).unwrap(), "fullsapps.com");
    }

    #[test]
    fn test_missing_static_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(copy_static(&dir.path().join("static"), dir.path()).unwrap(), 0);
    }
}
