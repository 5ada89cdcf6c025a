// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod log;
pub mod model;
pub mod overwrite;
pub mod progress;
pub mod reconcile;
pub mod rules;
pub mod runner;
pub mod store;

pub use error::{Error, Result};
pub use model::{MediaKind, MediaRecord, Movie, Record, Show};
