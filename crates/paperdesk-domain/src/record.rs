//! Paper record model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::de;
use crate::tags::normalize_tags;

/// Provenance of a record's `publication_date`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateSource {
    /// Date taken from the arXiv entry itself.
    Arxiv,
    /// Date estimated from the record id or year field.
    Estimated,
    /// No usable provenance (also the reading of any unrecognized label).
    Unknown,
}

impl DateSource {
    /// Parse a label from a catalog file. Unrecognized labels read as
    /// `Unknown` so a hand-edited file never fails to load.
    pub fn from_label(label: &str) -> Self {
        match label {
            "arxiv" => DateSource::Arxiv,
            "estimated" => DateSource::Estimated,
            _ => DateSource::Unknown,
        }
    }

    /// Sort priority: lower is preferred when publication dates tie.
    pub fn priority(self) -> u8 {
        match self {
            DateSource::Arxiv => 0,
            DateSource::Estimated => 1,
            DateSource::Unknown => 2,
        }
    }
}

/// One entry of the paper catalog.
///
/// Field declaration order is the canonical on-disk key order; the store
/// serializes records without alphabetizing keys so diffs stay stable.
/// Every field except `id` is optional, and recognized fields deserialize
/// leniently (see [`crate::de`]). Keys the editor does not know about are
/// preserved round-trip in `extra_fields`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(default, deserialize_with = "de::lenient_id")]
    pub id: String,

    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    /// Comma-separated author names, first author first.
    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub authors: Option<String>,

    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,

    #[serde(
        rename = "abstract",
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,

    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_page: Option<String>,

    /// URL of the paper PDF.
    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub paper: Option<String>,

    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,

    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub video: Option<String>,

    /// Tags from the closed vocabulary; persisted sorted and deduplicated.
    #[serde(
        default,
        deserialize_with = "de::lenient_string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    /// Relative path of the thumbnail side artifact, when one exists.
    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail: Option<String>,

    /// ISO-like publication date string.
    #[serde(
        default,
        deserialize_with = "de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub publication_date: Option<String>,

    #[serde(
        default,
        deserialize_with = "de::lenient_date_source",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_source: Option<DateSource>,

    /// Unrecognized keys, preserved round-trip.
    #[serde(flatten)]
    pub extra_fields: BTreeMap<String, serde_yaml::Value>,
}

impl PaperRecord {
    /// Create an empty record with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            authors: None,
            year: None,
            abstract_text: None,
            project_page: None,
            paper: None,
            code: None,
            video: None,
            tags: Vec::new(),
            thumbnail: None,
            publication_date: None,
            date_source: None,
            extra_fields: BTreeMap::new(),
        }
    }

    /// Get a field value by name (the form editor's read boundary).
    pub fn get_field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "title" => self.title.clone(),
            "authors" => self.authors.clone(),
            "year" => self.year.clone(),
            "abstract" => self.abstract_text.clone(),
            "project_page" => self.project_page.clone(),
            "paper" => self.paper.clone(),
            "code" => self.code.clone(),
            "video" => self.video.clone(),
            "thumbnail" => self.thumbnail.clone(),
            "publication_date" => self.publication_date.clone(),
            _ => self.extra_fields.get(name).and_then(de::scalar_to_string),
        }
    }

    /// Set a field value by name (the form editor's write boundary).
    ///
    /// An empty or whitespace-only value clears the field: edited-to-empty
    /// fields are persisted as absent, never as empty strings. `id` is
    /// immutable and writes to it are ignored.
    pub fn set_field(&mut self, name: &str, value: &str) {
        let value = if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        match name {
            "id" => {}
            "title" => self.title = value,
            "authors" => self.authors = value,
            "year" => self.year = value,
            "abstract" => self.abstract_text = value,
            "project_page" => self.project_page = value,
            "paper" => self.paper = value,
            "code" => self.code = value,
            "video" => self.video = value,
            "thumbnail" => self.thumbnail = value,
            "publication_date" => self.publication_date = value,
            _ => match value {
                Some(v) => {
                    self.extra_fields
                        .insert(name.to_string(), serde_yaml::Value::String(v));
                }
                None => {
                    self.extra_fields.remove(name);
                }
            },
        }
    }

    /// Bring the record to its persisted form: tags sorted and
    /// deduplicated, whitespace-only text fields cleared.
    pub fn normalize(&mut self) {
        self.tags = normalize_tags(&self.tags);
        for field in [
            &mut self.title,
            &mut self.authors,
            &mut self.year,
            &mut self.abstract_text,
            &mut self.project_page,
            &mut self.paper,
            &mut self.code,
            &mut self.video,
            &mut self.thumbnail,
            &mut self.publication_date,
        ] {
            if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *field = None;
            }
        }
    }
}
