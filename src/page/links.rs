//! Reading content fragments: title, word count and outgoing links.
//!
//! Fragments are parsed with `tl`, a lenient parser that accepts the partial
//! markup content files consist of.

use crate::utils::html::unescape;

/// Facts extracted from one HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentInfo {
    /// Text of the first `<h1>`, entities decoded, whitespace collapsed.
    pub title: Option<String>,
    /// Words of visible text.
    pub words: usize,
}

/// Attributes whose values are checked as links.
const LINK_ATTRS: [&str; 2] = ["href", "src"];

impl FragmentInfo {
    pub fn parse(html: &str) -> Self {
        let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
            return Self::default();
        };
        let parser = dom.parser();

        let title = dom
            .nodes()
            .iter()
            .filter_map(tl::Node::as_tag)
            .find(|tag| tag.name().as_utf8_str().eq_ignore_ascii_case("h1"))
            .map(|tag| collapse_whitespace(&unescape(&tag.inner_text(parser))))
            .filter(|title| !title.is_empty());

        let words = dom
            .nodes()
            .iter()
            .filter_map(|node| match node {
                tl::Node::Raw(bytes) => Some(bytes.as_utf8_str()),
                _ => None,
            })
            .map(|text| text.split_whitespace().count())
            .sum();

        Self { title, words }
    }
}

/// Values of every `href`/`src` attribute in `html`, in document order.
pub fn extract_links(html: &str) -> Vec<String> {
    let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
        return Vec::new();
    };

    dom.nodes()
        .iter()
        .filter_map(tl::Node::as_tag)
        .flat_map(|tag| {
            LINK_ATTRS.iter().filter_map(move |attr| {
                tag.attributes()
                    .get(*attr)
                    .flatten()
                    .map(|value| unescape(&value.as_utf8_str()).trim().to_string())
            })
        })
        .filter(|link| !link.is_empty())
        .collect()
}

/// Remove the first `<h1>...</h1>` element, for layouts that render the
/// title themselves.
pub fn strip_first_heading(html: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let Some(start) = find_h1_open(&lower) else {
        return html.to_string();
    };
    let Some(len) = lower[start..].find("</h1>") else {
        return html.to_string();
    };
    let end = start + len + "</h1>".len();

    let mut out = String::with_capacity(html.len());
    out.push_str(&html[..start]);
    out.push_str(html[end..].trim_start());
    out
}

/// Byte offset of the first `<h1>` or `<h1 ...>` tag in lowercased markup.
fn find_h1_open(lower: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(pos) = lower[offset..].find("<h1") {
        let at = offset + pos;
        match lower.as_bytes().get(at + 3) {
            Some(b'>' | b' ' | b'\t' | b'\n' | b'\r') => return Some(at),
            _ => offset = at + 3,
        }
    }
    None
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
