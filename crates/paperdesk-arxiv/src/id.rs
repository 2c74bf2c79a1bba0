//! arXiv id extraction from pasted input.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::ArxivError;

lazy_static! {
    /// New-style arXiv id, optionally versioned (e.g. 2412.21206v2).
    static ref ARXIV_ID: Regex = Regex::new(r"^\d{4}\.\d{4,5}(v\d+)?$").unwrap();
}

/// Extract an arXiv id from whatever the user pasted: a bare id, an
/// `arXiv:`-prefixed id, or an arxiv.org abs/pdf URL (scheme optional).
/// Returns `None` when nothing recognizable is found.
pub fn extract_arxiv_id(input: &str) -> Option<String> {
    let mut s = input.trim();

    if let Some(rest) = s
        .strip_prefix("arXiv:")
        .or_else(|| s.strip_prefix("arxiv:"))
    {
        s = rest.trim_start();
    }

    if ARXIV_ID.is_match(s) {
        return Some(s.to_string());
    }

    // Treat anything else as a URL; tolerate a missing scheme.
    let with_scheme = if s.starts_with("http://") || s.starts_with("https://") {
        s.to_string()
    } else {
        format!("https://{s}")
    };
    let url = Url::parse(&with_scheme).ok()?;
    if !url
        .host_str()
        .is_some_and(|h| h == "arxiv.org" || h.ends_with(".arxiv.org"))
    {
        return None;
    }

    let mut candidate = url.path_segments()?.last()?.to_string();
    if let Some(stripped) = candidate.strip_suffix(".pdf") {
        candidate = stripped.to_string();
    }
    ARXIV_ID.is_match(&candidate).then_some(candidate)
}

/// Like [`extract_arxiv_id`], but for the fetch boundary, where pasted
/// input that yields no id is a reportable error rather than a silent skip.
pub fn require_arxiv_id(input: &str) -> Result<String, ArxivError> {
    extract_arxiv_id(input).ok_or_else(|| ArxivError::InvalidId(input.trim().to_string()))
}
