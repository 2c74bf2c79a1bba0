//! Atom feed parsing and new-record construction.
//!
//! API docs: https://arxiv.org/help/api/user-manual

use chrono::Datelike;
use lazy_static::lazy_static;
use paperdesk_domain::{DateSource, PaperRecord};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use tracing::debug;

use crate::id::extract_arxiv_id;
use crate::ArxivError;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// One `<entry>` of an arXiv Atom feed.
#[derive(Clone, Debug, PartialEq)]
pub struct ArxivEntry {
    pub arxiv_id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    /// RFC 3339 timestamp from the `<published>` element.
    pub published: String,
}

/// Parse an arXiv Atom feed body into entries. Entries without a title
/// are dropped.
pub fn parse_feed(xml: &str) -> Result<Vec<ArxivEntry>, ArxivError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut in_entry = false;
    let mut in_author = false;
    let mut current_element = String::new();
    let mut entry_id = String::new();
    let mut entry_title = String::new();
    let mut entry_summary = String::new();
    let mut entry_published = String::new();
    let mut entry_authors: Vec<String> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                current_element = name.clone();

                if name == "entry" {
                    in_entry = true;
                    entry_id.clear();
                    entry_title.clear();
                    entry_summary.clear();
                    entry_published.clear();
                    entry_authors.clear();
                } else if name == "author" {
                    in_author = true;
                }
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();

                if name == "entry" {
                    if !entry_title.is_empty() {
                        entries.push(ArxivEntry {
                            arxiv_id: extract_arxiv_id(&entry_id).unwrap_or_else(|| entry_id.clone()),
                            title: clean_title(&entry_title),
                            authors: entry_authors.clone(),
                            summary: entry_summary.clone(),
                            published: entry_published.clone(),
                        });
                    }
                    in_entry = false;
                } else if name == "author" {
                    in_author = false;
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if in_entry {
                    let text = e.unescape().unwrap_or_default().to_string();
                    match current_element.as_str() {
                        "id" => entry_id = text,
                        "title" => entry_title = text,
                        "summary" => entry_summary = text,
                        "published" => entry_published = text,
                        "name" if in_author => entry_authors.push(text),
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ArxivError::Parse(format!("XML parse error: {e}"))),
            _ => {}
        }
        buf.clear();
    }

    debug!(count = entries.len(), "parsed arXiv feed");
    Ok(entries)
}

fn clean_title(title: &str) -> String {
    title
        .replace('\n', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl ArxivEntry {
    /// Publication year, taken from the `<published>` timestamp.
    pub fn year(&self) -> Option<i32> {
        chrono::DateTime::parse_from_rfc3339(&self.published)
            .map(|d| d.year())
            .ok()
            .or_else(|| self.published.get(..4).and_then(|y| y.parse().ok()))
    }

    /// Generated catalog id: `{first-author-lastname}{year}{first-title-word}`,
    /// lower-cased with punctuation stripped (e.g. `kerbl2023gaussian`).
    pub fn record_id(&self) -> String {
        let last_name = self
            .authors
            .first()
            .and_then(|a| a.split_whitespace().last())
            .map(|n| NON_WORD.replace_all(n, "").to_lowercase())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "unknown".to_string());
        let year = self.year().map(|y| y.to_string()).unwrap_or_default();
        let first_word = self
            .title
            .split_whitespace()
            .next()
            .map(|w| NON_WORD.replace_all(w, "").to_lowercase())
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| "paper".to_string());
        format!("{last_name}{year}{first_word}")
    }

    /// Build a fresh catalog record from this entry.
    pub fn into_record(self) -> PaperRecord {
        let id = self.record_id();
        let year = self.year();

        let mut record = PaperRecord::new(id.clone());
        record.title = Some(self.title);
        record.authors = Some(self.authors.join(", "));
        record.year = year.map(|y| y.to_string());
        record.abstract_text = Some(self.summary).filter(|s| !s.is_empty());
        record.paper = Some(format!("https://arxiv.org/pdf/{}.pdf", self.arxiv_id));
        record.thumbnail = Some(format!("assets/thumbnails/{id}.jpg"));
        if let Some(y) = year {
            record.tags = vec![format!("Year {y}")];
        }
        if !self.published.is_empty() {
            record.publication_date = Some(self.published);
            record.date_source = Some(DateSource::Arxiv);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=&amp;id_list=2308.04079</title>
  <entry>
    <id>http://arxiv.org/abs/2308.04079v1</id>
    <title>3D Gaussian Splatting for Real-Time
 Radiance Field Rendering</title>
    <summary>We introduce three key elements that allow real-time rendering.</summary>
    <published>2023-08-08T17:59:59Z</published>
    <author><name>Bernhard Kerbl</name></author>
    <author><name>Georgios Kopanas</name></author>
    <author><name>Thomas Leimk&#252;hler</name></author>
  </entry>
</feed>"#;

    #[test]
    fn parses_a_single_entry_feed() {
        let entries = parse_feed(FEED).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.arxiv_id, "2308.04079v1");
        assert_eq!(
            entry.title,
            "3D Gaussian Splatting for Real-Time Radiance Field Rendering"
        );
        assert_eq!(entry.authors.len(), 3);
        assert_eq!(entry.authors[2], "Thomas Leimkühler");
        assert_eq!(entry.published, "2023-08-08T17:59:59Z");
    }

    #[test]
    fn empty_feed_parses_to_no_entries() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>empty</title></feed>"#;
        assert_eq!(parse_feed(xml).unwrap(), Vec::new());
    }

    #[test]
    fn record_id_is_lastname_year_firstword() {
        let entries = parse_feed(FEED).unwrap();
        assert_eq!(entries[0].record_id(), "kerbl20233d");
    }

    #[test]
    fn into_record_fills_the_catalog_fields() {
        let record = parse_feed(FEED).unwrap().remove(0).into_record();
        assert_eq!(record.id, "kerbl20233d");
        assert_eq!(
            record.authors.as_deref(),
            Some("Bernhard Kerbl, Georgios Kopanas, Thomas Leimkühler")
        );
        assert_eq!(record.year.as_deref(), Some("2023"));
        assert_eq!(
            record.paper.as_deref(),
            Some("https://arxiv.org/pdf/2308.04079v1.pdf")
        );
        assert_eq!(
            record.thumbnail.as_deref(),
            Some("assets/thumbnails/kerbl20233d.jpg")
        );
        assert_eq!(record.tags, vec!["Year 2023".to_string()]);
        assert_eq!(
            record.publication_date.as_deref(),
            Some("2023-08-08T17:59:59Z")
        );
        assert_eq!(record.date_source, Some(DateSource::Arxiv));
    }
}
