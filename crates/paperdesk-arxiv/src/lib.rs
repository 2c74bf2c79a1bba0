//! arXiv metadata handling for the paperdesk editor
//!
//! The network half of paper fetching lives outside this repo; callers
//! hand the Atom feed body (or a date lookup implementation) to the
//! functions here. This crate covers the pure parts:
//! - extracting arXiv ids from pasted URLs or bare ids
//! - parsing the Atom feed into [`ArxivEntry`] values
//! - building a new [`paperdesk_domain::PaperRecord`] from an entry
//! - filling in `publication_date`/`date_source`, with an estimated
//!   fallback when arXiv has nothing (best-effort: enrichment failure
//!   never blocks record creation)

pub mod enrich;
pub mod feed;
pub mod id;

pub use enrich::{resolve_publication_date, DateLookup};
pub use feed::{parse_feed, ArxivEntry};
pub use id::{extract_arxiv_id, require_arxiv_id};

/// Errors from arXiv metadata handling.
#[derive(Debug, thiserror::Error)]
pub enum ArxivError {
    #[error("not a recognizable arXiv id or URL: {0}")]
    InvalidId(String),

    #[error("failed to parse Atom feed: {0}")]
    Parse(String),
}
