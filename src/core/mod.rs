// src/core/mod.rs

pub mod charmap;
pub mod html;
pub mod net;
pub mod sanitize;
pub mod slug;

pub use net::{HttpSource, SnapshotSource, Source};
pub use slug::slugify;
