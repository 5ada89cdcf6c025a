// src/core/slug.rs
use tracing::warn;

use super::charmap;

/// Guess a URL slug from a title.
///
/// `None` when the raw title is made only of decimal digits (no padding),
/// and when nothing slug-worthy is left.
/// Otherwise: trim, lower-case, transliterate via the char map, turn every run of
/// non-alphanumeric characters into a single `-`, drop dashes at both ends.
///
/// "Hunter × Hunter (2011)" → "hunter-x-hunter-2011"
pub fn slugify(title: &str) -> Option<String> {
    if !title.is_empty() && title.chars().all(|c| c.is_ascii_digit()) {
        warn!("Cannot slugify '{title}' - contains only numbers");
        return None;
    }

    let lower = title.trim().to_lowercase();
    let mut mapped = String::with_capacity(lower.len());
    for c in lower.chars() {
        match charmap::lookup(c) {
            Some(rep) => mapped.push_str(rep),
            None => mapped.push(c),
        }
    }

    let mut out = String::with_capacity(mapped.len());
    let mut gap = false;
    for c in mapped.chars() {
        if c.is_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }

    if out.is_empty() { None } else { Some(out) }
}
