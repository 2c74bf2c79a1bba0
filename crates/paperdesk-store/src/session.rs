//! Editing session over a catalog and its side artifacts.

use std::path::PathBuf;

use paperdesk_domain::PaperRecord;

use crate::catalog::{Catalog, CatalogError};
use crate::thumbnails::ThumbnailStore;

/// A single-user editing session: the catalog plus the thumbnail store.
///
/// The session sequences the operations the form editor calls between
/// user interactions. Deletion runs in two steps: the catalog removal
/// must succeed first, and only then is the thumbnail cleaned up, so a
/// cleanup failure can never block or roll back record removal.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    thumbnails: ThumbnailStore,
}

impl Session {
    /// Open a session over an existing catalog file.
    pub fn open(
        catalog_path: impl Into<PathBuf>,
        thumbnail_dir: impl Into<PathBuf>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: Catalog::load(catalog_path)?,
            thumbnails: ThumbnailStore::new(thumbnail_dir),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn thumbnails(&self) -> &ThumbnailStore {
        &self.thumbnails
    }

    /// Persist an edited record; returns its post-sort index.
    pub fn commit(&mut self, record: PaperRecord) -> Result<usize, CatalogError> {
        self.catalog.commit(record)
    }

    /// Append a freshly fetched record; returns its post-sort index.
    pub fn add_record(&mut self, record: PaperRecord) -> Result<usize, CatalogError> {
        self.catalog.insert(record)
    }

    /// Delete a record and, after the store confirms removal, its
    /// thumbnail. Returns the clamped new current index, `None` when the
    /// catalog becomes empty.
    pub fn delete_record(&mut self, id: &str) -> Result<Option<usize>, CatalogError> {
        let new_index = self.catalog.delete(id)?;
        self.thumbnails.remove(id);
        Ok(new_index)
    }

    /// Re-derive the index of a record after any reordering.
    pub fn locate(&self, id: &str) -> Option<usize> {
        self.catalog.locate(id)
    }
}
