// src/core/net.rs
// Where the source documents come from: the live site or a snapshot dir.

use std::{fs, path::PathBuf, time::Duration};

use reqwest::blocking::Client;
use tracing::info;

use crate::config::consts::{KIND_PLACEHOLDER, USER_AGENT};
use crate::error::{Error, Result};
use crate::model::MediaKind;

/// Provider of the raw HTML table for one media kind.
pub trait Source {
    fn fetch(&self, kind: MediaKind) -> Result<String>;

    /// Where `kind` is read from, for log lines.
    fn location(&self, kind: MediaKind) -> String;

    /// Whether the fetched document should be snapshotted again.
    fn is_remote(&self) -> bool { true }
}

/// Live fetch over HTTP(S). One GET per kind, no retry.
pub struct HttpSource {
    client: Client,
    url_template: String,
}

impl HttpSource {
    /// `url_template` contains `{kind}`, replaced by `movies` / `shows`.
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Result<Self> {
        let url_template = url_template.into();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Fetch { url: url_template.clone(), reason: e.to_string() })?;
        Ok(Self { client, url_template })
    }

    pub fn url(&self, kind: MediaKind) -> String {
        self.url_template.replace(KIND_PLACEHOLDER, kind.as_str())
    }
}

impl Source for HttpSource {
    fn fetch(&self, kind: MediaKind) -> Result<String> {
        let url = self.url(kind);
        info!("Fetching {kind} data from {url}");
        self.client
            .get(&url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| Error::Fetch { url, reason: e.to_string() })
    }

    fn location(&self, kind: MediaKind) -> String { self.url(kind) }
}

/// Previously saved `<dir>/<kind>.html` documents.
pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn path(&self, kind: MediaKind) -> PathBuf {
        self.dir.join(format!("{}.html", kind.as_str()))
    }
}

impl Source for SnapshotSource {
    fn fetch(&self, kind: MediaKind) -> Result<String> {
        let path = self.path(kind);
        info!("Reading {kind} data from {}", path.display());
        fs::read_to_string(&path).map_err(|e| Error::io(path, e))
    }

    fn location(&self, kind: MediaKind) -> String { self.path(kind).display().to_string() }

    fn is_remote(&self) -> bool { false }
}
