// src/core/sanitize.rs

/// Collapse whitespace runs to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Strip line breaks and tabs from a document before snapshotting it.
pub fn minify_html(html: &str) -> String {
    html.chars().filter(|c| !matches!(c, '\n' | '\r' | '\t')).collect()
}
