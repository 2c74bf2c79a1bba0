//! Static page generation for the paperdesk catalog
//!
//! The catalog doubles as the data source for a published paper list.
//! This crate renders the pure fragments of that page — year filter
//! options, tag filters, and per-paper cards — over the same record
//! list and ordering policy the editor uses, through a small
//! `$variable` substitution template. File and asset plumbing stays with
//! the caller; everything here is string in, string out.

pub mod builtin;
pub mod cards;
pub mod template;

pub use builtin::{DEFAULT_CARD_TEMPLATE, DEFAULT_PAGE_TEMPLATE};
pub use cards::{render_page, tag_filters, year_options, CardRenderer, PageAssets};
pub use template::Template;

/// Errors from page rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template references an unknown variable: {0}")]
    MissingVariable(String),

    #[error("template has a dangling '$' at byte {0}")]
    DanglingSubstitution(usize),
}
