//! URL slug generation.

use deunicode::deunicode;

/// Turn arbitrary text into a lowercase, dash-separated URL slug.
///
/// Non-ASCII text is transliterated first, so `Café Déjà` becomes `cafe-deja`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
