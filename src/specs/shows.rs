// src/specs/shows.rs
//
// Shows page: one row per Trakt show, one <br>-separated fragment per season.
//   <tr><td><a href=".../shows/<trakt_id>">Trakt title</a></td>
//       <td>S1 <a href=".../anime/<mal_id>">MAL title</a><br/>S2 ...</td></tr>
// Every season record shares the row's Trakt id and Trakt-derived slug.

use scraper::{ElementRef, Html};
use tracing::{debug, error};

use super::table::{self, Selectors};
use super::{Extracted, RowFailure};
use crate::core::html::{first_link, last_path_id, split_on_breaks, Link};
use crate::core::sanitize::normalize_ws;
use crate::core::slug::slugify;
use crate::error::{Result, RowError};
use crate::model::Show;

pub fn extract(html: &str) -> Result<Extracted<Show>> {
    let doc = Html::parse_document(html);
    let sel = Selectors::new()?;
    let rows = table::body_rows(&doc, &sel)?;

    let mut out = Extracted::default();
    for (i, row) in rows.into_iter().enumerate() {
        if let Err(e) = parse_row(i, row, &sel, &mut out) {
            error!("Error parsing show row {i}: {e}");
            out.failures.push(RowFailure { row: i, fragment: None, error: e });
        }
    }
    Ok(out)
}

/// Row-level problems are returned; fragment-level ones are recorded in `out`.
fn parse_row(
    row_ix: usize,
    row: ElementRef<'_>,
    sel: &Selectors,
    out: &mut Extracted<Show>,
) -> std::result::Result<(), RowError> {
    let cells = table::cells(row)?;
    let (trakt_id, trakt) = table::trakt_link(cells[0], sel)?;
    let slug = slugify(&trakt.text);

    let seasons_html = cells[1].inner_html();
    for (j, fragment) in split_on_breaks(&seasons_html).into_iter().enumerate() {
        match parse_fragment(fragment, trakt_id, &trakt, &slug, sel) {
            Ok(Some(show)) => {
                debug!(
                    "Processing '{}' S{} (MAL: {}, Trakt: {})",
                    show.title(), show.season(), show.mal_id(), show.trakt_id()
                );
                out.records.push(show);
            }
            Ok(None) => debug!("Row {row_ix} fragment {j}: no MAL link, season unmapped"),
            Err(e) => {
                error!("Error parsing show row {row_ix} fragment {j}: {e}");
                out.failures.push(RowFailure { row: row_ix, fragment: Some(j), error: e });
            }
        }
    }
    Ok(())
}

fn parse_fragment(
    fragment: &str,
    trakt_id: i64,
    trakt: &Link,
    slug: &Option<String>,
    sel: &Selectors,
) -> std::result::Result<Option<Show>, RowError> {
    let doc = Html::parse_fragment(fragment);
    let root = doc.root_element();
    let Some(mal) = first_link(root, &sel.link) else {
        return Ok(None);
    };
    let mal_id = last_path_id(&mal.href)?;

    let text = normalize_ws(&root.text().collect::<String>());
    let season = season_number(&text).ok_or_else(|| RowError::BadSeason(text.clone()))?;

    let title = table::pick_title(&mal, trakt);
    Ok(Some(Show::new(title, mal_id, trakt_id, season, slug.clone())?))
}

/// Leading `S<digits>` token: "S2 Title" → 2, "s10: x" → 10.
fn season_number(text: &str) -> Option<i64> {
    let token = text.split_whitespace().next()?;
    let rest = token.strip_prefix(['S', 's'])?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() { return None; }
    digits.parse().ok()
}
