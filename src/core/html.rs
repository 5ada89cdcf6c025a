// src/core/html.rs
// Small helpers over `scraper` plus the one string-level split we still
// need: season cells are several fragments glued together with <br>.

use scraper::{ElementRef, Selector};

use crate::error::{Error, Result, RowError};

/// ASCII-only lowercasing; byte offsets stay valid against the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Split markup on `<br>`, `<br/>`, `<br />` (any case).
/// Always yields at least one fragment; empty fragments are kept.
pub fn split_on_breaks(s: &str) -> Vec<&str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find("<br") {
        let open = pos + rel;
        let after = open + 3;
        let is_break = matches!(lc.as_bytes().get(after), Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r'));
        let Some(close_rel) = lc[after..].find('>') else { break };
        let close = after + close_rel + 1;
        if is_break {
            out.push(&s[start..open]);
            start = close;
        }
        pos = close;
    }
    out.push(&s[start..]);
    out
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Structure(format!("bad selector {css:?}: {e}")))
}

/// Direct element children with the given tag name.
pub fn children_named<'a>(el: ElementRef<'a>, name: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name().eq_ignore_ascii_case(name))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// First `<a href>` under `el`, with whitespace-normalized text.
pub fn first_link(el: ElementRef<'_>, a: &Selector) -> Option<Link> {
    let anchor = el.select(a).next()?;
    let href = anchor.value().attr("href")?.trim().to_string();
    let text = super::sanitize::normalize_ws(&anchor.text().collect::<String>());
    Some(Link { href, text })
}

/// Numeric id from the last path segment of a link target.
/// `https://myanimelist.net/anime/5114` → 5114 (a trailing `/` is tolerated).
pub fn last_path_id(href: &str) -> std::result::Result<i64, RowError> {
    let path = href.split(['?', '#']).next().unwrap_or_default();
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RowError::BadId(href.to_string()));
    }
    segment.parse::<i64>().map_err(|_| RowError::BadId(href.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_every_break_spelling() {
        let cell = "S1 <a>x</a><br/>S2 <a>y</a><BR>S3<br />tail";
        assert_eq!(split_on_breaks(cell), vec!["S1 <a>x</a>", "S2 <a>y</a>", "S3", "tail"]);
    }

    #[test]
    fn no_break_is_one_fragment() {
        assert_eq!(split_on_breaks("S1 <a>x</a>"), vec!["S1 <a>x</a>"]);
        assert_eq!(split_on_breaks(""), vec![""]);
    }

    #[test]
    fn similar_tags_are_not_breaks() {
        assert_eq!(split_on_breaks("a<bro>b"), vec!["a<bro>b"]);
    }

    #[test]
    fn ids_from_links() {
        assert_eq!(last_path_id("https://trakt.tv/shows/1390"), Ok(1390));
        assert_eq!(last_path_id("https://myanimelist.net/anime/5114/"), Ok(5114));
        assert_eq!(last_path_id("/anime/20?ref=x"), Ok(20));
        assert!(matches!(last_path_id("https://trakt.tv/shows/cowboy-bebop"), Err(RowError::BadId(_))));
        assert!(matches!(last_path_id(""), Err(RowError::BadId(_))));
    }
}
