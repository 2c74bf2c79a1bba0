//! The store synchronizer: a YAML-backed, always-sorted record list.
//!
//! Every mutating operation re-sorts and rewrites the whole backing file
//! before returning, so disk and memory agree at every call boundary.
//! There is no deferred write path; a field edit ends in [`Catalog::commit`].
//!
//! Writes go through a same-directory temp file and an atomic rename, so
//! an interrupted save leaves the previous file content in place.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use paperdesk_domain::PaperRecord;
use serde_yaml::Value;
use tracing::{debug, warn};

use crate::ordering::sort_records;

/// Errors from the catalog store.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The backing file does not contain a sequence of records. This is
    /// the one fatal, non-recoverable error.
    #[error("catalog is not a sequence of records: {0}")]
    Format(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The caller named a record of interest that is not in the list.
    #[error("record not found: {0}")]
    MissingRecord(String),

    #[error("record already exists: {0}")]
    DuplicateRecord(String),

    #[error("catalog is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The record list and its backing file.
///
/// Owns the list outright; callers address records by `id`, never by
/// positional index, and re-derive indices through [`Catalog::locate`]
/// after any mutation.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    records: Vec<PaperRecord>,
}

impl Catalog {
    /// Create an empty catalog. The backing file is written on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Load and sort the full record list from the backing file.
    ///
    /// An empty file reads as an empty catalog. Any document that is not
    /// a sequence fails with [`CatalogError::Format`].
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;

        let document: Value = serde_yaml::from_str(&text)?;
        let mut records: Vec<PaperRecord> = match document {
            Value::Null => Vec::new(),
            Value::Sequence(_) => serde_yaml::from_value(document)
                .map_err(|e| CatalogError::Format(e.to_string()))?,
            other => {
                return Err(CatalogError::Format(format!(
                    "expected a sequence, found {}",
                    value_kind(&other)
                )))
            }
        };

        sort_records(&mut records);
        debug!(count = records.len(), path = %path.display(), "loaded catalog");
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PaperRecord> {
        self.records.get(index)
    }

    /// Index of the record with the given id. With duplicate ids (only
    /// possible in a hand-edited file) the first match wins.
    pub fn locate(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Re-sort and rewrite the whole backing file. Saving an empty list
    /// writes an empty sequence.
    pub fn save(&mut self) -> Result<(), CatalogError> {
        sort_records(&mut self.records);
        let text = serde_yaml::to_string(&self.records)?;
        write_atomic(&self.path, &text).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "catalog save failed");
            CatalogError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(count = self.records.len(), path = %self.path.display(), "saved catalog");
        Ok(())
    }

    /// Save, then return the new index of the record of interest.
    pub fn save_and_locate(&mut self, id: &str) -> Result<usize, CatalogError> {
        self.save()?;
        self.locate(id)
            .ok_or_else(|| CatalogError::MissingRecord(id.to_string()))
    }

    /// Persist an edited record: normalize it, replace the stored record
    /// with the same id, re-sort, rewrite, and return the record's new
    /// index. This is the single "field edit finished" boundary.
    pub fn commit(&mut self, mut record: PaperRecord) -> Result<usize, CatalogError> {
        let index = self
            .locate(&record.id)
            .ok_or_else(|| CatalogError::MissingRecord(record.id.clone()))?;
        record.normalize();
        let id = record.id.clone();
        self.records[index] = record;
        self.save_and_locate(&id)
    }

    /// Add a new record and return its post-sort index. Refuses an id
    /// already present in the catalog.
    pub fn insert(&mut self, mut record: PaperRecord) -> Result<usize, CatalogError> {
        if self.locate(&record.id).is_some() {
            return Err(CatalogError::DuplicateRecord(record.id.clone()));
        }
        record.normalize();
        let id = record.id.clone();
        self.records.push(record);
        self.save_and_locate(&id)
    }

    /// Remove the record with the given id, rewrite the store, and return
    /// the clamped new current index: `min(old_index, new_len - 1)`, or
    /// `None` when the catalog becomes empty.
    pub fn delete(&mut self, id: &str) -> Result<Option<usize>, CatalogError> {
        let old_index = self
            .locate(id)
            .ok_or_else(|| CatalogError::MissingRecord(id.to_string()))?;
        self.records.remove(old_index);
        self.save()?;
        if self.records.is_empty() {
            Ok(None)
        } else {
            Ok(Some(old_index.min(self.records.len() - 1)))
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Write via a same-directory temp file and rename, so the previous
/// content stays intact unless the full write succeeds.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp = path.with_extension(format!("tmp.{}", process::id()));
    let result = (|| {
        let mut file = File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}
