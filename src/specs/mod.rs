// src/specs/mod.rs
//! # Page specs
//!
//! One spec per source page. A spec knows where the ground truth lives in the
//! HTML and how to turn each table row into typed records.
//!
//! ## What lives here
//! - Locating the table body (`<tbody>`) and walking its rows/cells.
//! - Reading the Trakt link (first cell) and the MyAnimeList link(s) (second cell).
//! - Per-row recovery: a broken row becomes a [`RowFailure`], never an abort.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), curation (`rules`, `overwrite`), persistence (`store`).
//!
//! ## Typical call chain
//! ```text
//! runner → Source::fetch → specs::<kind>::extract → reconcile → store
//! ```
//!
//! ## Invariants
//! - Output order is document order.
//! - Missing `<tbody>` is a structure error for the whole page.
//! - Shows: a season fragment with no MAL link is an unmapped season and is
//!   skipped silently; any other broken fragment is a logged [`RowFailure`].

pub mod movies;
pub mod shows;
mod table;

use crate::error::{Result, RowError};
use crate::model::{Movie, Show};

/// A row (or season fragment) that was dropped, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowFailure {
    /// Zero-based row index inside the table body.
    pub row: usize,
    /// Zero-based `<br>`-separated fragment for season cells.
    pub fragment: Option<usize>,
    pub error: RowError,
}

/// Records in document order plus everything that was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extracted<R> {
    pub records: Vec<R>,
    pub failures: Vec<RowFailure>,
}

impl<R> Default for Extracted<R> {
    fn default() -> Self { Self { records: Vec::new(), failures: Vec::new() } }
}

/// Record types that have a page spec.
pub trait Extract: Sized {
    fn extract(html: &str) -> Result<Extracted<Self>>;
}

impl Extract for Movie {
    fn extract(html: &str) -> Result<Extracted<Self>> { movies::extract(html) }
}

impl Extract for Show {
    fn extract(html: &str) -> Result<Extracted<Self>> { shows::extract(html) }
}

pub use movies::extract as extract_movies;
pub use shows::extract as extract_shows;
