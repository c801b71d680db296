//! URL-friendly identifiers derived from program names.
//!
//! Program pages are addressed as `/program/<slug>`; the slug is recomputed
//! from the name on every lookup, so two programs whose names slugify to the
//! same value are ambiguous and the first one in display order wins.

use crate::domain::a001_catalog::{Configuration, Program};

/// The browser regex `\s` class. Differs from [`char::is_whitespace`] on
/// U+0085 (not whitespace here) and U+FEFF (whitespace here).
fn is_regex_whitespace(ch: char) -> bool {
    match ch {
        '\u{0085}' => false,
        '\u{FEFF}' => true,
        other => other.is_whitespace(),
    }
}

/// Lowercases, turns whitespace runs into single hyphens, drops everything
/// outside `[a-z0-9_-]`, collapses repeated hyphens and trims them from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.to_lowercase().chars() {
        if is_regex_whitespace(ch) || ch == '-' {
            pending_hyphen = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        }
    }

    slug
}

/// First program whose name slugifies to `slug`.
pub fn resolve<'a, I>(programs: I, slug: &str) -> Option<&'a Program>
where
    I: IntoIterator<Item = &'a Program>,
{
    programs.into_iter().find(|p| slugify(&p.name) == slug)
}

impl Configuration {
    pub fn find_by_slug(&self, slug: &str) -> Option<&Program> {
        resolve(self.programs(), slug)
    }
}
