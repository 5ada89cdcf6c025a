// src/specs/movies.rs
//
// Movies page: one row per movie.
//   <tr><td><a href=".../movies/<trakt_id>">Trakt title</a></td>
//       <td><a href=".../anime/<mal_id>">MAL title</a></td></tr>

use scraper::{ElementRef, Html};
use tracing::{debug, error};

use super::table::{self, Selectors};
use super::{Extracted, RowFailure};
use crate::core::html::{first_link, last_path_id};
use crate::core::slug::slugify;
use crate::error::{Result, RowError};
use crate::model::Movie;

pub fn extract(html: &str) -> Result<Extracted<Movie>> {
    let doc = Html::parse_document(html);
    let sel = Selectors::new()?;
    let rows = table::body_rows(&doc, &sel)?;

    let mut out = Extracted::default();
    for (i, row) in rows.into_iter().enumerate() {
        match parse_row(row, &sel) {
            Ok(movie) => {
                debug!(
                    "Processing '{}' (MAL: {}, Trakt: {})",
                    movie.title(), movie.mal_id(), movie.trakt_id()
                );
                out.records.push(movie);
            }
            Err(e) => {
                error!("Error parsing movie row {i}: {e}");
                out.failures.push(RowFailure { row: i, fragment: None, error: e });
            }
        }
    }
    Ok(out)
}

fn parse_row(row: ElementRef<'_>, sel: &Selectors) -> std::result::Result<Movie, RowError> {
    let cells = table::cells(row)?;
    let (trakt_id, trakt) = table::trakt_link(cells[0], sel)?;
    let mal = first_link(cells[1], &sel.link).ok_or(RowError::MissingLink("MAL"))?;
    let mal_id = last_path_id(&mal.href)?;

    let title = table::pick_title(&mal, &trakt);
    Ok(Movie::new(title, mal_id, trakt_id, slugify(&trakt.text))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(rows: &str) -> String {
        format!("<html><body><table><thead><tr><th>Trakt</th><th>MAL</th></tr></thead><tbody>{rows}</tbody></table></body></html>")
    }

    #[test]
    fn falls_back_to_trakt_title() {
        let html = page(r#"<tr><td><a href="https://trakt.tv/movies/7">Akira</a></td><td><a href="https://myanimelist.net/anime/47"></a></td></tr>"#);
        let got = extract(&html).unwrap();
        assert_eq!(got.records.len(), 1);
        assert_eq!(got.records[0].title(), "Akira");
        assert_eq!(got.records[0].guessed_slug(), Some("akira"));
    }

    #[test]
    fn zero_id_is_a_row_failure() {
        let html = page(r#"<tr><td><a href="https://trakt.tv/movies/0">X</a></td><td><a href="https://myanimelist.net/anime/47">X</a></td></tr>"#);
        let got = extract(&html).unwrap();
        assert!(got.records.is_empty());
        assert!(matches!(got.failures[0].error, RowError::Invalid(_)));
    }

    #[test]
    fn non_numeric_link_target_skips_only_that_row() {
        let html = page(concat!(
            r#"<tr><td><a href="https://trakt.tv/movies/akira">Akira</a></td><td><a href="https://myanimelist.net/anime/47">Akira</a></td></tr>"#,
            r#"<tr><td><a href="https://trakt.tv/movies/9">Paprika</a></td><td><a href="https://myanimelist.net/anime/1943/Paprika">Paprika</a></td></tr>"#,
            r#"<tr><td><a href="https://trakt.tv/movies/10">Redline</a></td><td><a href="https://myanimelist.net/anime/6675">Redline</a></td></tr>"#,
        ));
        let got = extract(&html).unwrap();
        assert_eq!(got.records.len(), 1);
        assert_eq!(got.records[0].title(), "Redline");
        assert_eq!(got.failures.len(), 2);
        assert_eq!(got.failures[0].row, 0);
        assert_eq!(got.failures[0].error, RowError::BadId(s!("https://trakt.tv/movies/akira")));
        assert_eq!(got.failures[1].row, 1);
        assert!(matches!(got.failures[1].error, RowError::BadId(_)));
    }
}
