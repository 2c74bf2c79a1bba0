//! Publication-date enrichment.
//!
//! Records arrive without a `publication_date` more often than not. The
//! real date lives on arXiv; fetching it is the caller's concern and is
//! injected through [`DateLookup`]. When arXiv has nothing we fall back
//! to an estimated mid-year date derived from the record id or the year
//! field. Enrichment is best-effort: a record that cannot be dated is
//! still a valid record.

use lazy_static::lazy_static;
use paperdesk_domain::{DateSource, PaperRecord};
use regex::Regex;
use tracing::debug;

use crate::id::extract_arxiv_id;

lazy_static! {
    /// A four-digit 20xx year embedded in a record id like `smith2024gaussian`.
    static ref ID_YEAR: Regex = Regex::new(r"20\d{2}").unwrap();
}

/// The injected network half of enrichment: resolve an arXiv id to its
/// published timestamp.
pub trait DateLookup {
    fn published(&self, arxiv_id: &str) -> Option<String>;
}

/// Fill in `publication_date`/`date_source` for a record that lacks them.
///
/// Tries, in order: the arXiv date via the record's `paper` URL, then an
/// estimated date from the id or year field. A record that already has a
/// date is left untouched. Returns whether the record ends up dated.
pub fn resolve_publication_date(record: &mut PaperRecord, lookup: &impl DateLookup) -> bool {
    if record.publication_date.is_some() {
        return true;
    }

    if let Some(arxiv_id) = record.paper.as_deref().and_then(extract_arxiv_id) {
        if let Some(published) = lookup.published(&arxiv_id) {
            debug!(id = %record.id, %published, "dated record from arXiv");
            record.publication_date = Some(published);
            record.date_source = Some(DateSource::Arxiv);
            return true;
        }
    }

    if let Some(estimated) = estimated_date(record) {
        debug!(id = %record.id, %estimated, "dated record by estimate");
        record.publication_date = Some(estimated);
        record.date_source = Some(DateSource::Estimated);
        return true;
    }

    false
}

/// Mid-year date guessed from a `20xx` match in the record id, or from
/// the year field.
fn estimated_date(record: &PaperRecord) -> Option<String> {
    let year = ID_YEAR
        .find(&record.id)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .or_else(|| record.year.as_deref().and_then(|y| y.trim().parse().ok()))?;
    Some(format!("{year}-07-01T00:00:00"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLookup(Option<&'static str>);

    impl DateLookup for FixedLookup {
        fn published(&self, _arxiv_id: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn existing_date_is_left_untouched() {
        let mut record = PaperRecord::new("kerbl2023gaussian");
        record.publication_date = Some("2023-08-08T00:00:00".into());

        assert!(resolve_publication_date(
            &mut record,
            &FixedLookup(Some("1999-01-01T00:00:00Z"))
        ));
        assert_eq!(
            record.publication_date.as_deref(),
            Some("2023-08-08T00:00:00")
        );
        assert_eq!(record.date_source, None);
    }

    #[test]
    fn arxiv_date_wins_when_the_lookup_has_one() {
        let mut record = PaperRecord::new("kerbl2023gaussian");
        record.paper = Some("https://arxiv.org/pdf/2308.04079.pdf".into());

        assert!(resolve_publication_date(
            &mut record,
            &FixedLookup(Some("2023-08-08T17:59:59Z"))
        ));
        assert_eq!(record.date_source, Some(DateSource::Arxiv));
    }

    #[test]
    fn falls_back_to_year_in_the_id() {
        let mut record = PaperRecord::new("smith2024gaussian");
        record.paper = Some("https://arxiv.org/pdf/2404.00001.pdf".into());

        assert!(resolve_publication_date(&mut record, &FixedLookup(None)));
        assert_eq!(
            record.publication_date.as_deref(),
            Some("2024-07-01T00:00:00")
        );
        assert_eq!(record.date_source, Some(DateSource::Estimated));
    }

    #[test]
    fn falls_back_to_the_year_field() {
        let mut record = PaperRecord::new("nodigits");
        record.year = Some("2021".into());

        assert!(resolve_publication_date(&mut record, &FixedLookup(None)));
        assert_eq!(
            record.publication_date.as_deref(),
            Some("2021-07-01T00:00:00")
        );
    }

    #[test]
    fn undatable_record_stays_usable() {
        let mut record = PaperRecord::new("nodigits");

        assert!(!resolve_publication_date(&mut record, &FixedLookup(None)));
        assert_eq!(record.publication_date, None);
        assert_eq!(record.date_source, None);
    }
}
