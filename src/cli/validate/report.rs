//! Broken link report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A link whose target does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// The link as written.
    pub target: String,
    /// Where the link appears when it is not the page body, e.g. "navbar".
    pub context: Option<&'static str>,
}

/// Broken links grouped by source file, sorted for stable output.
#[derive(Debug, Default)]
pub struct LinkReport {
    pub broken: BTreeMap<String, Vec<BrokenLink>>,
}

impl LinkReport {
    pub fn add(&mut self, source: String, target: String, context: Option<&'static str>) {
        self.broken
            .entry(source)
            .or_default()
            .push(BrokenLink { target, context });
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.broken.is_empty()
    }

    /// Count of files with broken links.
    pub fn file_count(&self) -> usize {
        self.broken.len()
    }

    /// Total broken link count.
    pub fn link_count(&self) -> usize {
        self.broken.values().map(Vec::len).sum()
    }

    /// Print the full report to stderr.
    pub fn print(&self) {
        if self.is_empty() {
            return;
        }
        eprintln!();

        let file_count = self.file_count();
        let link_count = self.link_count();
        eprintln!(
            "{} {}",
            "broken links".red().bold(),
            format!(
                "({file_count} file{}, {link_count} link{})",
                plural_s(file_count),
                plural_s(link_count)
            )
            .dimmed()
        );

        for (source, links) in &self.broken {
            eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            for link in links {
                match link.context {
                    Some(context) => {
                        eprintln!("{} {} {}", "→".red(), link.target, format!("({context})").dimmed())
                    }
                    None => eprintln!("{} {}", "→".red(), link.target),
                }
            }
        }
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.link_count();
        if total == 0 {
            write!(f, "{}", "all links valid".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("broken link{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_groups_by_source() {
        let mut report = LinkReport::default();
        report.add("pages/about.html".into(), "/missing/".into(), None);
        report.add("folio.toml".into(), "/docs".into(), Some("navbar"));
        report.add("pages/about.html".into(), "/gone/".into(), None);

        assert_eq!(report.file_count(), 2);
        assert_eq!(report.link_count(), 3);
        let sources: Vec<_> = report.broken.keys().map(String::as_str).collect();
        assert_eq!(sources, ["folio.toml", "pages/about.html"]);
    }

    #[test]
    fn test_empty_report() {
        let report = LinkReport::default();
        assert!(report.is_empty());
        assert!(report.to_string().contains("all links valid"));
    }
}
