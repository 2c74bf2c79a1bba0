//! Catalog persistence and ordering for the paperdesk editor
//!
//! Two pieces make up the editor's core contract:
//! - the ordering policy ([`ordering`]): a pure, total, newest-first sort
//!   key over paper records, stable under re-sorting;
//! - the store synchronizer ([`Catalog`]): load/save/locate/delete over
//!   the backing YAML file, keeping disk and memory in agreement after
//!   every mutation and re-locating the record of interest by id (never by
//!   positional index) after each re-sort.
//!
//! [`Session`] layers the thumbnail side-artifact store on top so that
//! record deletion and artifact cleanup stay decoupled: cleanup runs only
//! after the catalog confirms removal and can never block it.

pub mod catalog;
pub mod ordering;
pub mod session;
pub mod thumbnails;

pub use catalog::{Catalog, CatalogError};
pub use ordering::{compare_records, sort_key, sort_records, SortKey};
pub use session::Session;
pub use thumbnails::ThumbnailStore;
