// src/error.rs
//! Error taxonomy.
//!
//! `RowError` is recovered inside the extractor (logged, row skipped).
//! Everything in `Error` aborts the current media kind only.

use std::path::PathBuf;

use thiserror::Error;

/// A record invariant was violated at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("MAL id must be at least 1")]
    MalId,
    #[error("Trakt id must be at least 1")]
    TraktId,
    #[error("season must be at least 1")]
    Season,
}

/// A single row or season fragment could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected at least 2 cells, found {0}")]
    TooFewCells(usize),
    #[error("missing {0} link")]
    MissingLink(&'static str),
    #[error("link target {0:?} does not end in a numeric id")]
    BadId(String),
    #[error("fragment {0:?} has no S<number> season marker")]
    BadSeason(String),
    #[error("invalid record: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Expected table container missing from the source document.
    #[error("structure error: {0}")]
    Structure(String),

    /// Ignore/overwrite file present but unusable.
    #[error("invalid data in {path}: {reason}")]
    ConfigData { path: PathBuf, reason: String },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub fn config_data(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::ConfigData { path: path.into(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
