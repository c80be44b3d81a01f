//! URL slugification.
//!
//! Converts arbitrary text (article titles, directory names) to URL-safe
//! lowercase ASCII identifiers.

use deunicode::deunicode;

/// Convert text to a URL-safe slug.
///
/// - transliterates unicode to ASCII (`deunicode`)
/// - lowercases
/// - collapses whitespace, underscores, and punctuation runs into `-`
/// - strips leading/trailing separators
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = true; // suppress a leading dash

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash && (c.is_whitespace() || matches!(c, '-' | '_' | '.' | '/')) {
            slug.push('-');
            prev_dash = true;
        }
        // remaining punctuation is dropped entirely
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
