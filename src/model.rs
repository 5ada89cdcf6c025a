// src/model.rs
//
// Record shapes shared by the extractor, the curation files and the output.
//
// - Movie / Show: validated records. Fields are private; the only ways in are
//   `new` (checks invariants) and serde (goes through the same check).
// - MediaRecord: the tagged sum over both, serialized with a `type` field.
// - Record: what the filter/merge/sort pipeline needs from a record.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movies,
    Shows,
}

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::Movies, MediaKind::Shows];

    /// Value of the `type` discriminant and of `{kind}` in the source URL.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Movies => "movies",
            MediaKind::Shows => "shows",
        }
    }

    /// Stem used for the data files (`tv.json`, `ignore_tv.json`, ...).
    pub fn file_stem(self) -> &'static str {
        match self {
            MediaKind::Movies => "movies",
            MediaKind::Shows => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ---------------- validated records ---------------- */

/// Single-unit item (a movie).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MovieFields")]
pub struct Movie {
    title: String,
    mal_id: u32,
    trakt_id: u32,
    guessed_slug: Option<String>,
}

/// One season of a multi-season item. Several `Show`s may share a `trakt_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShowFields")]
pub struct Show {
    title: String,
    mal_id: u32,
    trakt_id: u32,
    guessed_slug: Option<String>,
    season: u32,
}

fn check_common(title: &str, mal_id: i64, trakt_id: i64) -> Result<(u32, u32), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let mal = u32::try_from(mal_id).ok().filter(|v| *v >= 1).ok_or(ValidationError::MalId)?;
    let trakt = u32::try_from(trakt_id).ok().filter(|v| *v >= 1).ok_or(ValidationError::TraktId)?;
    Ok((mal, trakt))
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        mal_id: i64,
        trakt_id: i64,
        guessed_slug: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let (mal_id, trakt_id) = check_common(&title, mal_id, trakt_id)?;
        Ok(Self { title, mal_id, trakt_id, guessed_slug })
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn mal_id(&self) -> u32 { self.mal_id }
    pub fn trakt_id(&self) -> u32 { self.trakt_id }
    pub fn guessed_slug(&self) -> Option<&str> { self.guessed_slug.as_deref() }
}

impl Show {
    pub fn new(
        title: impl Into<String>,
        mal_id: i64,
        trakt_id: i64,
        season: i64,
        guessed_slug: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let (mal_id, trakt_id) = check_common(&title, mal_id, trakt_id)?;
        let season = u32::try_from(season).ok().filter(|v| *v >= 1).ok_or(ValidationError::Season)?;
        Ok(Self { title, mal_id, trakt_id, guessed_slug, season })
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn mal_id(&self) -> u32 { self.mal_id }
    pub fn trakt_id(&self) -> u32 { self.trakt_id }
    pub fn guessed_slug(&self) -> Option<&str> { self.guessed_slug.as_deref() }
    pub fn season(&self) -> u32 { self.season }
}

/// Unchecked wire shape of a movie; ids are signed so that `0` or `-1`
/// surface as a validation error instead of a type error.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieFields {
    pub title: String,
    pub mal_id: i64,
    pub trakt_id: i64,
    #[serde(default)]
    pub guessed_slug: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ShowFields {
    pub title: String,
    pub mal_id: i64,
    pub trakt_id: i64,
    #[serde(default)]
    pub guessed_slug: Option<String>,
    pub season: i64,
}

impl TryFrom<MovieFields> for Movie {
    type Error = ValidationError;
    fn try_from(f: MovieFields) -> Result<Self, Self::Error> {
        Movie::new(f.title, f.mal_id, f.trakt_id, f.guessed_slug)
    }
}

impl TryFrom<ShowFields> for Show {
    type Error = ValidationError;
    fn try_from(f: ShowFields) -> Result<Self, Self::Error> {
        Show::new(f.title, f.mal_id, f.trakt_id, f.season, f.guessed_slug)
    }
}

/* ---------------- tagged union ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaRecord {
    Movies(Movie),
    Shows(Show),
}

/// Curation-file entry before validation.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawRecord {
    Movies(MovieFields),
    Shows(ShowFields),
}

impl RawRecord {
    pub fn kind(&self) -> MediaKind {
        match self {
            RawRecord::Movies(_) => MediaKind::Movies,
            RawRecord::Shows(_) => MediaKind::Shows,
        }
    }
}

impl TryFrom<RawRecord> for MediaRecord {
    type Error = ValidationError;
    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawRecord::Movies(f) => MediaRecord::Movies(f.try_into()?),
            RawRecord::Shows(f) => MediaRecord::Shows(f.try_into()?),
        })
    }
}

/* ---------------- field access for ignore conditions ---------------- */

/// A record field as seen by ignore conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(u32),
}

impl FieldValue<'_> {
    /// Exact equality against a JSON value. Numbers compare by value, so
    /// `5` and `5.0` are the same id; strings never equal numbers.
    pub fn eq_json(&self, expected: &Value) -> bool {
        match (self, expected) {
            (FieldValue::Text(a), Value::String(b)) => *a == b.as_str(),
            (FieldValue::Int(a), Value::Number(n)) => {
                n.as_u64() == Some(u64::from(*a)) || n.as_f64() == Some(f64::from(*a))
            }
            _ => false,
        }
    }
}

/// What the reconciliation pipeline needs from a record.
pub trait Record: Clone + fmt::Debug {
    fn kind(&self) -> MediaKind;
    fn title(&self) -> &str;
    /// Merge/override identity.
    fn mal_id(&self) -> u32;
    /// Named field lookup; `None` covers both "null" and "not on this variant".
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
    fn to_media(&self) -> MediaRecord;
    /// Give the record back when it is the other variant.
    fn from_media(record: MediaRecord) -> Result<Self, MediaRecord>;
}

impl Record for Movie {
    fn kind(&self) -> MediaKind { MediaKind::Movies }
    fn title(&self) -> &str { &self.title }
    fn mal_id(&self) -> u32 { self.mal_id }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "title" => Some(FieldValue::Text(&self.title)),
            "mal_id" => Some(FieldValue::Int(self.mal_id)),
            "trakt_id" => Some(FieldValue::Int(self.trakt_id)),
            "guessed_slug" => self.guessed_slug.as_deref().map(FieldValue::Text),
            "type" => Some(FieldValue::Text(MediaKind::Movies.as_str())),
            _ => None,
        }
    }

    fn to_media(&self) -> MediaRecord { MediaRecord::Movies(self.clone()) }

    fn from_media(record: MediaRecord) -> Result<Self, MediaRecord> {
        match record {
            MediaRecord::Movies(m) => Ok(m),
            other => Err(other),
        }
    }
}

impl Record for Show {
    fn kind(&self) -> MediaKind { MediaKind::Shows }
    fn title(&self) -> &str { &self.title }
    fn mal_id(&self) -> u32 { self.mal_id }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "title" => Some(FieldValue::Text(&self.title)),
            "mal_id" => Some(FieldValue::Int(self.mal_id)),
            "trakt_id" => Some(FieldValue::Int(self.trakt_id)),
            "guessed_slug" => self.guessed_slug.as_deref().map(FieldValue::Text),
            "season" => Some(FieldValue::Int(self.season)),
            "type" => Some(FieldValue::Text(MediaKind::Shows.as_str())),
            _ => None,
        }
    }

    fn to_media(&self) -> MediaRecord { MediaRecord::Shows(self.clone()) }

    fn from_media(record: MediaRecord) -> Result<Self, MediaRecord> {
        match record {
            MediaRecord::Shows(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl Record for MediaRecord {
    fn kind(&self) -> MediaKind {
        match self {
            MediaRecord::Movies(_) => MediaKind::Movies,
            MediaRecord::Shows(_) => MediaKind::Shows,
        }
    }

    fn title(&self) -> &str {
        match self {
            MediaRecord::Movies(m) => m.title(),
            MediaRecord::Shows(s) => s.title(),
        }
    }

    fn mal_id(&self) -> u32 {
        match self {
            MediaRecord::Movies(m) => m.mal_id(),
            MediaRecord::Shows(s) => s.mal_id(),
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match self {
            MediaRecord::Movies(m) => Record::field(m, name),
            MediaRecord::Shows(s) => Record::field(s, name),
        }
    }

    fn to_media(&self) -> MediaRecord { self.clone() }

    fn from_media(record: MediaRecord) -> Result<Self, MediaRecord> { Ok(record) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_broken_invariants() {
        assert_eq!(Movie::new("", 1, 1, None), Err(ValidationError::EmptyTitle));
        assert_eq!(Movie::new("A", 0, 1, None), Err(ValidationError::MalId));
        assert_eq!(Movie::new("A", 1, -3, None), Err(ValidationError::TraktId));
        assert_eq!(Show::new("A", 1, 1, 0, None), Err(ValidationError::Season));
        assert!(Show::new("A", 1, 1, 1, None).is_ok());
    }

    #[test]
    fn serialized_shape_has_type_tag_and_nullable_slug() {
        let show = Show::new("Show A", 100, 10, 2, None).unwrap();
        let v = serde_json::to_value(show.to_media()).unwrap();
        assert_eq!(v["type"], "shows");
        assert_eq!(v["title"], "Show A");
        assert_eq!(v["mal_id"], 100);
        assert_eq!(v["trakt_id"], 10);
        assert_eq!(v["season"], 2);
        assert!(v["guessed_slug"].is_null());
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let bad = r#"{"type":"movies","title":"X","mal_id":0,"trakt_id":5,"guessed_slug":null}"#;
        assert!(serde_json::from_str::<MediaRecord>(bad).is_err());

        let good = r#"{"type":"movies","title":"X","mal_id":3,"trakt_id":5,"guessed_slug":"x"}"#;
        let rec: MediaRecord = serde_json::from_str(good).unwrap();
        assert_eq!(rec.mal_id(), 3);
        assert_eq!(rec.kind(), MediaKind::Movies);
    }

    #[test]
    fn season_is_absent_on_movies() {
        let m = Movie::new("A", 1, 2, Some(s!("a"))).unwrap();
        assert_eq!(Record::field(&m, "season"), None);
        assert_eq!(Record::field(&m, "nope"), None);
        assert_eq!(Record::field(&m, "guessed_slug"), Some(FieldValue::Text("a")));
    }

    #[test]
    fn numbers_compare_by_value() {
        let v = FieldValue::Int(5);
        assert!(v.eq_json(&serde_json::json!(5)));
        assert!(v.eq_json(&serde_json::json!(5.0)));
        assert!(!v.eq_json(&serde_json::json!("5")));
        assert!(!FieldValue::Text("5").eq_json(&serde_json::json!(5)));
    }
}
