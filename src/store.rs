// src/store.rs
//
// On-disk layout of one data directory:
//   ignore_<stem>.json     curation: ignore rules (optional)
//   overwrite_<stem>.json  curation: manual records (optional)
//   <stem>.json            output, fully rewritten every run
// where <stem> is `movies` or `tv`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::consts::{IGNORE_PREFIX, OVERWRITE_PREFIX, TIMESTAMP_FORMAT};
use crate::core::sanitize::minify_html;
use crate::error::{Error, Result};
use crate::file::{ensure_directory, write_text};
use crate::model::{MediaKind, MediaRecord, RawRecord, Record};
use crate::rules::IgnoreRule;

pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Wrap `root`, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_directory(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn ignore_path(&self, kind: MediaKind) -> PathBuf {
        self.root.join(join!(IGNORE_PREFIX, kind.file_stem(), ".json"))
    }

    pub fn overwrite_path(&self, kind: MediaKind) -> PathBuf {
        self.root.join(join!(OVERWRITE_PREFIX, kind.file_stem(), ".json"))
    }

    pub fn output_path(&self, kind: MediaKind) -> PathBuf {
        self.root.join(join!(kind.file_stem(), ".json"))
    }

    /// Ignore rules for `kind`; a missing file means no rules.
    pub fn load_ignore_rules(&self, kind: MediaKind) -> Result<Vec<IgnoreRule>> {
        let path = self.ignore_path(kind);
        let rules: Vec<IgnoreRule> = read_json(&path)?.unwrap_or_default();
        if !rules.is_empty() {
            info!("Loaded {} ignore rules from {}", rules.len(), path.display());
        }
        Ok(rules)
    }

    /// Manual records for `kind`; a missing file means none.
    ///
    /// Entries are validated like scraped records. An invalid entry is an
    /// `Error::Validation`; an entry of the other kind is `Error::ConfigData`.
    pub fn load_overwrites<R: Record>(&self, kind: MediaKind) -> Result<Vec<R>> {
        let path = self.overwrite_path(kind);
        let Some(raw) = read_json::<Vec<RawRecord>>(&path)? else {
            return Ok(Vec::new());
        };

        let mut out = Vec::with_capacity(raw.len());
        for (i, entry) in raw.into_iter().enumerate() {
            if entry.kind() != kind {
                return Err(Error::config_data(
                    &path,
                    format!("entry {i} has type '{}', expected '{kind}'", entry.kind()),
                ));
            }
            let record: MediaRecord = entry.try_into()?;
            let record = R::from_media(record).map_err(|other| {
                Error::config_data(&path, format!("entry {i} has type '{}', expected '{kind}'", other.kind()))
            })?;
            out.push(record);
        }
        info!("Loaded {} overwrite entries from {}", out.len(), path.display());
        Ok(out)
    }

    /// Replace `<stem>.json` with `records` as a pretty JSON array.
    pub fn save_records<R: Record>(&self, kind: MediaKind, records: &[R]) -> Result<PathBuf> {
        let path = self.output_path(kind);
        let media: Vec<MediaRecord> = records.iter().map(Record::to_media).collect();
        let json = serde_json::to_string_pretty(&media)?;
        write_text(&path, &json)?;
        info!("Written {} items to {}", media.len(), path.display());
        Ok(path)
    }
}

/// `Ok(None)` when the file does not exist; unreadable or malformed is fatal.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} not found, skipping", path.display());
            return Ok(None);
        }
        Err(e) => return Err(Error::config_data(path, e)),
    };
    serde_json::from_str(&text).map(Some).map_err(|e| Error::config_data(path, e))
}

/// Save the fetched page as `<dir>/<kind>.html`, minified.
pub fn write_snapshot(dir: &Path, kind: MediaKind, html: &str) -> Result<PathBuf> {
    let path = dir.join(join!(kind.as_str(), ".html"));
    write_text(&path, &minify_html(html))?;
    info!("Saved {kind} snapshot to {}", path.display());
    Ok(path)
}

/// Overwrite `path` with the current UTC time.
pub fn write_timestamp(path: &Path) -> Result<String> {
    let stamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    write_text(path, &stamp)?;
    info!("Updated timestamp {stamp} in {}", path.display());
    Ok(stamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Movie, Show};

    #[test]
    fn file_names_use_kind_stems() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::open(tmp.path()).unwrap();
        assert!(dir.output_path(MediaKind::Shows).ends_with("tv.json"));
        assert!(dir.ignore_path(MediaKind::Movies).ends_with("ignore_movies.json"));
        assert!(dir.overwrite_path(MediaKind::Shows).ends_with("overwrite_tv.json"));
    }

    #[test]
    fn missing_curation_files_are_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::open(tmp.path().join("db")).unwrap();
        assert!(dir.load_ignore_rules(MediaKind::Movies).unwrap().is_empty());
        assert!(dir.load_overwrites::<Show>(MediaKind::Shows).unwrap().is_empty());
    }

    #[test]
    fn malformed_curation_file_is_config_data() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::open(tmp.path()).unwrap();
        fs::write(dir.ignore_path(MediaKind::Movies), "{ not json").unwrap();
        let err = dir.load_ignore_rules(MediaKind::Movies).unwrap_err();
        assert!(matches!(err, Error::ConfigData { .. }));
    }

    #[test]
    fn wrong_kind_in_overwrite_is_config_data() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::open(tmp.path()).unwrap();
        fs::write(
            dir.overwrite_path(MediaKind::Movies),
            r#"[{"type":"shows","title":"S","mal_id":1,"trakt_id":2,"guessed_slug":null,"season":1}]"#,
        )
        .unwrap();
        let err = dir.load_overwrites::<Movie>(MediaKind::Movies).unwrap_err();
        assert!(matches!(err, Error::ConfigData { .. }));
    }

    #[test]
    fn invalid_override_is_validation() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = DataDir::open(tmp.path()).unwrap();
        fs::write(
            dir.overwrite_path(MediaKind::Movies),
            r#"[{"type":"movies","title":"","mal_id":1,"trakt_id":2,"guessed_slug":null}]"#,
        )
        .unwrap();
        let err = dir.load_overwrites::<Movie>(MediaKind::Movies).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn snapshot_is_minified() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_snapshot(tmp.path(), MediaKind::Shows, "<table>\n\t<tr></tr>\r\n</table>").unwrap();
        assert!(path.ends_with("shows.html"));
        assert_eq!(fs::read_to_string(path).unwrap(), "<table><tr></tr></table>");
    }

    #[test]
    fn timestamp_format() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("updated.txt");
        let stamp = write_timestamp(&path).unwrap();
        assert_eq!(stamp.len(), "2024-01-02 03:04:05".len());
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(fs::read_to_string(path).unwrap(), stamp);
    }
}
