//! Page fragments: year filter options, tag filters, and paper cards.

use std::collections::HashMap;

use paperdesk_domain::PaperRecord;
use paperdesk_store::sort_records;

use crate::template::Template;
use crate::RenderError;

/// Inlined CSS and JS for the page template.
#[derive(Clone, Debug, Default)]
pub struct PageAssets {
    pub styles: String,
    pub scripts: String,
}

/// `<option>` elements for the year filter, unique years newest first.
pub fn year_options(records: &[PaperRecord]) -> String {
    let mut years: Vec<&str> = records
        .iter()
        .filter_map(|r| r.year.as_deref())
        .filter(|y| !y.is_empty())
        .collect();
    years.sort_unstable();
    years.dedup();
    years.reverse();
    years
        .iter()
        .map(|y| format!(r#"<option value="{y}">{y}</option>"#))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `tag-filter` divs for every tag in use, sorted, `Year` pseudo-tags
/// excluded (the year dropdown covers those).
pub fn tag_filters(records: &[PaperRecord]) -> String {
    let mut tags: Vec<&str> = records
        .iter()
        .flat_map(|r| r.tags.iter())
        .map(String::as_str)
        .filter(|t| !t.starts_with("Year "))
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags.iter()
        .map(|t| format!(r#"<div class="tag-filter" data-tag="{t}">{t}</div>"#))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one card per record through a card template.
#[derive(Clone, Debug)]
pub struct CardRenderer {
    template: Template,
}

impl CardRenderer {
    pub fn new(template: Template) -> Self {
        Self { template }
    }

    /// Render a single card.
    pub fn render_card(&self, record: &PaperRecord) -> Result<String, RenderError> {
        let thumbnail = record
            .thumbnail
            .clone()
            .unwrap_or_else(|| format!("assets/thumbnails/{}.jpg", record.id));
        let tags_json =
            serde_json::to_string(&record.tags).unwrap_or_else(|_| "[]".to_string());

        let context = HashMap::from([
            ("id", record.id.clone()),
            ("title", record.title.clone().unwrap_or_default()),
            ("authors", record.authors.clone().unwrap_or_default()),
            ("year", record.year.clone().unwrap_or_default()),
            ("tags_json", tags_json),
            ("thumbnail", thumbnail),
            ("tags_html", tag_spans(record)),
            ("links_html", links(record)),
            (
                "abstract_html",
                record.abstract_text.clone().unwrap_or_default(),
            ),
        ]);
        self.template.render(&context)
    }

    /// Render every record as a card, newest first.
    pub fn render_cards(&self, records: &[PaperRecord]) -> Result<String, RenderError> {
        let mut sorted = records.to_vec();
        sort_records(&mut sorted);
        let cards = sorted
            .iter()
            .map(|r| self.render_card(r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(cards.join("\n"))
    }
}

fn tag_spans(record: &PaperRecord) -> String {
    record
        .tags
        .iter()
        .filter(|t| !t.starts_with("Year "))
        .map(|t| format!(r#"<span class="paper-tag">{t}</span>"#))
        .collect::<Vec<_>>()
        .join("\n")
}

fn link(url: &str, text: &str, emoji: &str) -> String {
    format!(
        r#"<a href="{url}" class="paper-link" target="_blank" rel="noopener">{emoji} {text}</a>"#
    )
}

fn links(record: &PaperRecord) -> String {
    let mut parts = Vec::new();
    // Paper first, then the optional links in fixed order.
    if let Some(url) = usable_url(&record.paper) {
        parts.push(link(url, "Paper", "📄"));
    }
    if let Some(url) = usable_url(&record.project_page) {
        parts.push(link(url, "Project", "🌐"));
    }
    if let Some(url) = usable_url(&record.code) {
        parts.push(link(url, "Code", "💻"));
    }
    if let Some(url) = usable_url(&record.video) {
        parts.push(link(url, "Video", "🎥"));
    }
    if let Some(text) = record.abstract_text.as_deref().filter(|a| !a.is_empty()) {
        parts.push(
            r#"<button class="abstract-toggle" onclick="toggleAbstract(this)">📖 Show Abstract</button>"#
                .to_string(),
        );
        parts.push(format!(r#"<div class="paper-abstract">{text}</div>"#));
    }
    parts.join("\n")
}

// Hand-edited files sometimes carry a literal "None" where a URL was cleared.
fn usable_url(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .filter(|u| !u.is_empty() && !u.eq_ignore_ascii_case("none"))
}

/// Render the full catalog page: assets and fragments substituted into the
/// page template, cards through the card template.
pub fn render_page(
    page: &Template,
    assets: &PageAssets,
    records: &[PaperRecord],
    cards: &CardRenderer,
) -> Result<String, RenderError> {
    let context = HashMap::from([
        ("styles", assets.styles.clone()),
        ("scripts", assets.scripts.clone()),
        ("year_options", year_options(records)),
        ("tag_filters", tag_filters(records)),
        ("paper_cards", cards.render_cards(records)?),
    ]);
    page.render(&context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{DEFAULT_CARD_TEMPLATE, DEFAULT_PAGE_TEMPLATE};
    use paperdesk_domain::DateSource;

    fn record(id: &str, year: &str, date: Option<&str>) -> PaperRecord {
        let mut r = PaperRecord::new(id);
        r.title = Some(format!("Title {id}"));
        r.authors = Some("Ada Lovelace".to_string());
        r.year = Some(year.to_string());
        r.publication_date = date.map(str::to_string);
        r
    }

    #[test]
    fn year_options_are_unique_and_newest_first() {
        let records = vec![
            record("a", "2021", None),
            record("b", "2024", None),
            record("c", "2021", None),
        ];
        assert_eq!(
            year_options(&records),
            "<option value=\"2024\">2024</option>\n<option value=\"2021\">2021</option>"
        );
    }

    #[test]
    fn tag_filters_skip_year_pseudo_tags() {
        let mut a = record("a", "2023", None);
        a.tags = vec!["Rendering".into(), "Year 2023".into()];
        let mut b = record("b", "2023", None);
        b.tags = vec!["Code".into(), "Rendering".into()];

        let html = tag_filters(&[a, b]);
        assert_eq!(
            html,
            "<div class=\"tag-filter\" data-tag=\"Code\">Code</div>\n\
             <div class=\"tag-filter\" data-tag=\"Rendering\">Rendering</div>"
        );
    }

    #[test]
    fn card_links_only_for_present_urls() {
        let renderer = CardRenderer::new(Template::new("$links_html"));
        let mut r = record("kerbl2023gaussian", "2023", None);
        r.paper = Some("https://arxiv.org/pdf/2308.04079.pdf".to_string());
        r.code = Some("https://github.com/graphdeco-inria/gaussian-splatting".to_string());
        r.video = Some("None".to_string());

        let html = renderer.render_card(&r).unwrap();
        assert!(html.contains("📄 Paper"));
        assert!(html.contains("💻 Code"));
        assert!(!html.contains("🎥"));
        assert!(!html.contains("🌐"));
        assert!(!html.contains("abstract-toggle"));
    }

    #[test]
    fn card_with_abstract_gets_toggle_and_body() {
        let renderer = CardRenderer::new(Template::new("$links_html"));
        let mut r = record("a", "2023", None);
        r.abstract_text = Some("We splat gaussians.".to_string());

        let html = renderer.render_card(&r).unwrap();
        assert!(html.contains("📖 Show Abstract"));
        assert!(html.contains("<div class=\"paper-abstract\">We splat gaussians.</div>"));
    }

    #[test]
    fn missing_thumbnail_falls_back_to_id_path() {
        let renderer = CardRenderer::new(Template::new("$thumbnail"));
        let r = record("mueller2024new", "2024", None);
        assert_eq!(
            renderer.render_card(&r).unwrap(),
            "assets/thumbnails/mueller2024new.jpg"
        );
    }

    #[test]
    fn cards_render_newest_first() {
        let renderer = CardRenderer::new(Template::new("[$id]"));
        let records = vec![
            record("old", "2021", Some("2021-03-01T00:00:00")),
            record("new", "2024", Some("2024-06-01T00:00:00")),
            record("undated", "2020", None),
        ];
        assert_eq!(
            renderer.render_cards(&records).unwrap(),
            "[new]\n[old]\n[undated]"
        );
    }

    #[test]
    fn default_templates_render_a_full_page() {
        let mut r = record("kerbl2023gaussian", "2023", Some("2023-08-08T00:00:00"));
        r.date_source = Some(DateSource::Arxiv);
        r.tags = vec!["Rendering".into(), "Year 2023".into()];
        r.paper = Some("https://arxiv.org/pdf/2308.04079.pdf".to_string());

        let assets = PageAssets {
            styles: "body { margin: 0; }".to_string(),
            scripts: "console.log('ready');".to_string(),
        };
        let page = Template::new(DEFAULT_PAGE_TEMPLATE);
        let cards = CardRenderer::new(Template::new(DEFAULT_CARD_TEMPLATE));

        let html = render_page(&page, &assets, std::slice::from_ref(&r), &cards).unwrap();
        assert!(html.contains("body { margin: 0; }"));
        assert!(html.contains("<option value=\"2023\">2023</option>"));
        assert!(html.contains("data-tag=\"Rendering\""));
        assert!(html.contains("Title kerbl2023gaussian"));
        assert!(html.contains("assets/thumbnails/kerbl2023gaussian.jpg"));
    }
}
