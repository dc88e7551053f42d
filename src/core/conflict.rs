//! Route conflict detection: two sources claiming one URL.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::UrlPath;
use crate::log;
use crate::utils::plural_s;

/// A URL conflict: multiple sources claim the same route.
#[derive(Debug, Clone)]
pub struct UrlConflict {
    /// The conflicting URL
    pub url: UrlPath,
    /// All source paths claiming this URL (relative to root)
    pub sources: Vec<PathBuf>,
}

/// Find routes claimed by more than one source.
///
/// Results are sorted by URL so reports are stable across runs.
pub fn detect_conflicts<'a>(
    routes: impl IntoIterator<Item = (&'a UrlPath, &'a Path)>,
    root: &Path,
) -> Vec<UrlConflict> {
    let mut url_sources: FxHashMap<&UrlPath, Vec<PathBuf>> = FxHashMap::default();
    for (url, source) in routes {
        url_sources
            .entry(url)
            .or_default()
            .push(source.strip_prefix(root).unwrap_or(source).to_path_buf());
    }

    let mut conflicts: Vec<_> = url_sources
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(url, sources)| UrlConflict {
            url: url.clone(),
            sources,
        })
        .collect();
    conflicts.sort_by(|a, b| a.url.cmp(&b.url));
    conflicts
}

/// Print conflicts using the standard log format.
///
/// ```text
/// [error] route conflicts (1 url, 2 sources)
/// [url] /about/ (2 sources)
///   - pages/about.html
///   - pages/about/index.html
/// ```
pub fn print_conflicts(conflicts: &[UrlConflict]) {
    if conflicts.is_empty() {
        return;
    }

    let total_sources: usize = conflicts.iter().map(|c| c.sources.len()).sum();
    log!("error"; "route conflicts ({} url{}, {} source{})",
        conflicts.len(), plural_s(conflicts.len()),
        total_sources, plural_s(total_sources));

    for conflict in conflicts {
        log!("url"; "{} ({} source{})", conflict.url, conflict.sources.len(), plural_s(conflict.sources.len()));
        for source in &conflict.sources {
            eprintln!("  - {}", source.display());
        }
    }
}
