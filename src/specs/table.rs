// src/specs/table.rs
// Shared table walking for both pages.

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{children_named, first_link, last_path_id, selector, Link};
use crate::error::{Error, Result, RowError};

/// Compiled once per page.
pub struct Selectors {
    pub tbody: Selector,
    pub link: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self { tbody: selector("tbody")?, link: selector("a")? })
    }
}

/// `<tr>` rows of the first table body, in document order.
pub fn body_rows<'a>(doc: &'a Html, sel: &Selectors) -> Result<Vec<ElementRef<'a>>> {
    let tbody = doc
        .select(&sel.tbody)
        .next()
        .ok_or_else(|| Error::Structure("could not find table body in HTML".into()))?;
    Ok(children_named(tbody, "tr").collect())
}

/// The row's `<td>` cells; at least two are required.
pub fn cells(row: ElementRef<'_>) -> std::result::Result<Vec<ElementRef<'_>>, RowError> {
    let cells: Vec<_> = children_named(row, "td").collect();
    if cells.len() < 2 {
        return Err(RowError::TooFewCells(cells.len()));
    }
    Ok(cells)
}

/// Trakt link of the first cell, as (id, link text).
pub fn trakt_link(cell: ElementRef<'_>, sel: &Selectors) -> std::result::Result<(i64, Link), RowError> {
    let link = first_link(cell, &sel.link).ok_or(RowError::MissingLink("Trakt"))?;
    Ok((last_path_id(&link.href)?, link))
}

/// Preferred title: MAL link text, else the Trakt link text.
pub fn pick_title(mal: &Link, trakt: &Link) -> String {
    if mal.text.is_empty() { trakt.text.clone() } else { mal.text.clone() }
}
