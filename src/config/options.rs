// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::core::{HttpSource, SnapshotSource, Source};
use crate::error::Result;
use crate::model::MediaKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KindSelector {
    All,
    One(MediaKind),
}

impl KindSelector {
    /// Kinds in processing order (movies before shows).
    pub fn kinds(&self) -> Vec<MediaKind> {
        match self {
            KindSelector::All => MediaKind::ALL.to_vec(),
            KindSelector::One(kind) => vec![*kind],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceMode {
    /// Fetch from the site; `{kind}` in the template is substituted.
    Remote { url_template: String, timeout: Duration },
    /// Read `<dir>/<kind>.html` saved by an earlier run.
    Snapshot(PathBuf),
}

impl Default for SourceMode {
    fn default() -> Self {
        SourceMode::Remote {
            url_template: BASE_URL.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

impl SourceMode {
    pub fn build(&self) -> Result<Box<dyn Source>> {
        Ok(match self {
            SourceMode::Remote { url_template, timeout } => {
                Box::new(HttpSource::new(url_template.clone(), *timeout)?)
            }
            SourceMode::Snapshot(dir) => Box::new(SnapshotSource::new(dir.clone())),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub kinds: KindSelector,
    pub source: SourceMode,
    /// Curation inputs and final outputs live here.
    pub data_dir: PathBuf,
    /// Minified copy of each fetched page; `None` disables it.
    pub snapshot_dir: Option<PathBuf>,
    /// Written after every selected kind succeeded; `None` disables it.
    pub timestamp_path: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            kinds: KindSelector::All,
            source: SourceMode::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            snapshot_dir: Some(PathBuf::from(DEFAULT_SNAPSHOT_DIR)),
            timestamp_path: Some(PathBuf::from(TIMESTAMP_FILE)),
        }
    }
}

impl RunOptions {
    /// Everything under one directory; handy for tests and one-off runs.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            data_dir: root.join(DEFAULT_DATA_DIR),
            snapshot_dir: Some(root.to_path_buf()),
            timestamp_path: Some(root.join(TIMESTAMP_FILE)),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_in_order() {
        assert_eq!(KindSelector::All.kinds(), vec![MediaKind::Movies, MediaKind::Shows]);
        assert_eq!(KindSelector::One(MediaKind::Shows).kinds(), vec![MediaKind::Shows]);
    }

    #[test]
    fn defaults_point_at_live_site() {
        let opts = RunOptions::default();
        assert_eq!(opts.data_dir, PathBuf::from("db"));
        match opts.source {
            SourceMode::Remote { url_template, timeout } => {
                assert!(url_template.contains(KIND_PLACEHOLDER));
                assert_eq!(timeout, Duration::from_secs(30));
            }
            SourceMode::Snapshot(_) => panic!("default should be remote"),
        }
    }
}
