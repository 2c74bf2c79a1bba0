//! Newest-first ordering policy for paper records.
//!
//! Display order and post-sort relocation both rely on this key, so it
//! must be pure, total over arbitrarily malformed records, and stable:
//! sorting the same list twice yields the same order.
//!
//! The composite key compares, in order:
//! 1. publication date, newest first; records without a usable date sort
//!    after every dated record;
//! 2. date provenance, `arxiv` before `estimated` before anything else;
//! 3. lower-cased last name of the first author (sentinel `"z"`);
//! 4. lower-cased title (sentinel `"z"`).

use std::cmp::{Ordering, Reverse};

use paperdesk_domain::{DateSource, PaperRecord};

/// Sentinel for missing or unparseable author/title legs; sorts after any
/// real lower-cased name that precedes it alphabetically.
const MISSING_TEXT: &str = "z";

/// Publication-date leg of the sort key. Dated records order newest-first
/// among themselves; undated records compare greater than any dated one,
/// which places them last in an ascending sort of the whole key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum DateKey {
    Dated(Reverse<String>),
    Undated,
}

/// Total sort key for a record. Sorting records ascending by this key
/// yields the catalog's display order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    date: DateKey,
    source_priority: u8,
    author: String,
    title: String,
}

/// Extract the sort key. Never fails: every malformed field degrades to
/// its documented sentinel.
pub fn sort_key(record: &PaperRecord) -> SortKey {
    let date = match record.publication_date.as_deref() {
        Some(d) if !d.trim().is_empty() => DateKey::Dated(Reverse(d.to_string())),
        _ => DateKey::Undated,
    };

    SortKey {
        date,
        source_priority: record
            .date_source
            .unwrap_or(DateSource::Unknown)
            .priority(),
        author: first_author_last_name(record.authors.as_deref()),
        title: record
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.to_lowercase())
            .unwrap_or_else(|| MISSING_TEXT.to_string()),
    }
}

/// Compare two records in display order.
pub fn compare_records(a: &PaperRecord, b: &PaperRecord) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Sort a record list into display order (stable).
pub fn sort_records(records: &mut [PaperRecord]) {
    records.sort_by_cached_key(sort_key);
}

/// Lower-cased last name of the first author in a comma-separated author
/// list, or the missing-text sentinel.
fn first_author_last_name(authors: Option<&str>) -> String {
    authors
        .and_then(|a| a.split(',').next())
        .and_then(|first| first.trim().split_whitespace().last())
        .map(|last| last.to_lowercase())
        .unwrap_or_else(|| MISSING_TEXT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> PaperRecord {
        PaperRecord::new(id)
    }

    #[test]
    fn dated_record_sorts_before_undated() {
        let mut a = record("a");
        a.publication_date = Some("2023-05-01".into());
        let b = record("b");

        assert_eq!(compare_records(&a, &b), Ordering::Less);

        let mut list = vec![b, a];
        sort_records(&mut list);
        assert_eq!(list[0].id, "a");
        assert_eq!(list[1].id, "b");
    }

    #[test]
    fn newer_dates_sort_first() {
        let mut old = record("old");
        old.publication_date = Some("2021-01-15".into());
        let mut new = record("new");
        new.publication_date = Some("2024-11-30".into());

        let mut list = vec![old, new];
        sort_records(&mut list);
        assert_eq!(list[0].id, "new");
    }

    #[test]
    fn arxiv_source_beats_estimated_on_equal_dates() {
        let mut estimated = record("estimated");
        estimated.publication_date = Some("2024-01-01".into());
        estimated.date_source = Some(paperdesk_domain::DateSource::Estimated);
        let mut from_arxiv = record("arxiv");
        from_arxiv.publication_date = Some("2024-01-01".into());
        from_arxiv.date_source = Some(paperdesk_domain::DateSource::Arxiv);

        let mut list = vec![estimated, from_arxiv];
        sort_records(&mut list);
        assert_eq!(list[0].id, "arxiv");
    }

    #[test]
    fn author_last_name_breaks_ties() {
        let mut zhang = record("zhang");
        zhang.publication_date = Some("2024-01-01".into());
        zhang.authors = Some("Wei Zhang, Li Chen".into());
        let mut adams = record("adams");
        adams.publication_date = Some("2024-01-01".into());
        adams.authors = Some("Jane Adams".into());

        let mut list = vec![zhang, adams];
        sort_records(&mut list);
        assert_eq!(list[0].id, "adams");
    }

    #[test]
    fn missing_authors_sort_last_within_equal_dates() {
        let mut named = record("named");
        named.publication_date = Some("2024-01-01".into());
        named.authors = Some("Jane Adams".into());
        let mut anonymous = record("anonymous");
        anonymous.publication_date = Some("2024-01-01".into());

        let mut list = vec![anonymous, named];
        sort_records(&mut list);
        assert_eq!(list[0].id, "named");
    }

    #[test]
    fn title_is_the_final_tiebreak() {
        let mut b = record("b");
        b.publication_date = Some("2024-01-01".into());
        b.authors = Some("Jane Adams".into());
        b.title = Some("Zebra Splatting".into());
        let mut a = record("a");
        a.publication_date = Some("2024-01-01".into());
        a.authors = Some("John Adams".into());
        a.title = Some("Aardvark Splatting".into());

        let mut list = vec![b, a];
        sort_records(&mut list);
        assert_eq!(list[0].id, "a");
    }

    #[test]
    fn key_is_total_over_empty_records() {
        let empty = record("empty");
        let key = sort_key(&empty);
        assert_eq!(key.author, "z");
        assert_eq!(key.title, "z");
        assert_eq!(key.source_priority, 2);
    }

    #[test]
    fn whitespace_date_counts_as_undated() {
        let mut blank = record("blank");
        blank.publication_date = Some("   ".into());
        let mut dated = record("dated");
        dated.publication_date = Some("2020-01-01".into());

        assert_eq!(compare_records(&dated, &blank), Ordering::Less);
    }

    #[test]
    fn sorting_twice_is_stable() {
        let mut list: Vec<PaperRecord> = (0..20)
            .map(|i| {
                let mut r = record(&format!("r{i}"));
                if i % 3 != 0 {
                    r.publication_date = Some(format!("202{}-0{}-01", i % 4, i % 9 + 1));
                }
                if i % 2 == 0 {
                    r.authors = Some(format!("Author {}", i % 5));
                }
                r
            })
            .collect();

        sort_records(&mut list);
        let first_pass: Vec<String> = list.iter().map(|r| r.id.clone()).collect();
        sort_records(&mut list);
        let second_pass: Vec<String> = list.iter().map(|r| r.id.clone()).collect();
        assert_eq!(first_pass, second_pass);
    }
}
