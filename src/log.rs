// src/log.rs
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::file::ensure_directory;

/// Install the global subscriber: stderr always, plus an append-only
/// file sink when `log_file` is given. `RUST_LOG` wins over `verbose`.
///
/// A second call keeps the first subscriber and logs that at debug level.
pub fn init(verbose: bool, log_file: Option<&Path>) {
    let default = if verbose { "anitrakt_db=debug" } else { "anitrakt_db=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let stderr = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    let file_layer = log_file.and_then(open_log_file).map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file_layer)
        .try_init();
    if installed.is_err() {
        tracing::debug!("Log subscriber already installed; keeping the existing one");
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && ensure_directory(parent).is_err() {
            return None;
        }
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_running() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logs/debug.log");
        init(false, Some(&path));
        init(true, None);
        assert!(path.exists());
    }
}
