//! Thumbnail side-artifact store.
//!
//! Thumbnails are associated with records purely by naming convention
//! (`{id}.jpg` under the thumbnail directory), never by an in-record
//! reference. This store only consults and removes them; generation is an
//! external collaborator's job.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Directory of per-record thumbnail files.
#[derive(Clone, Debug)]
pub struct ThumbnailStore {
    dir: PathBuf,
}

impl ThumbnailStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the thumbnail for a record id, or `None` for an id that is
    /// not a plain file name. Ids come from catalog files the user can hand
    /// edit, so one containing a path separator (or `..`) must not resolve
    /// to anything outside the thumbnail directory.
    pub fn path_for(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || id == ".." || id.contains(['/', '\\']) {
            return None;
        }
        Some(self.dir.join(format!("{id}.jpg")))
    }

    pub fn exists(&self, id: &str) -> bool {
        self.path_for(id).is_some_and(|p| p.exists())
    }

    /// Best-effort removal. Absence is not an error, and I/O failures are
    /// logged and swallowed; cleanup must never block record removal.
    /// Returns whether a file was actually removed.
    pub fn remove(&self, id: &str) -> bool {
        let Some(path) = self.path_for(id) else {
            warn!(id, "refusing thumbnail removal for non-filename id");
            return false;
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed thumbnail");
                true
            }
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to remove thumbnail");
                false
            }
        }
    }
}
