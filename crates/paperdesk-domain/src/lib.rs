//! Domain types for the paperdesk catalog editor
//!
//! This crate provides the canonical model for a curated paper catalog:
//! - PaperRecord: one entry of the YAML-backed paper list
//! - DateSource: provenance of a record's publication date
//! - TagVocabulary: the closed tag set records may draw from
//! - validation: offline checks for records before they are published
//!
//! Field handling is deliberately lenient: a record with a missing or
//! mistyped field still loads, edits, and sorts. Only a structurally
//! broken catalog (not a sequence) is treated as fatal, and that lives in
//! the store crate.

pub mod de;
pub mod record;
pub mod tags;
pub mod validation;

pub use record::*;
pub use tags::*;
pub use validation::*;
