//! Built-in page and card templates.
//!
//! Bundled so the generator works out of the box; callers with their own
//! layout pass any [`crate::Template`] instead.

/// Full catalog page. Variables: `styles`, `scripts`, `year_options`,
/// `tag_filters`, `paper_cards`.
pub const DEFAULT_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Paper Catalog</title>
<style>
${styles}
</style>
</head>
<body>
<header class="site-header">
  <h1>Paper Catalog</h1>
  <div class="filters">
    <select id="year-filter">
      <option value="">All years</option>
${year_options}
    </select>
    <div class="tag-filters">
${tag_filters}
    </div>
  </div>
</header>
<main id="paper-list">
${paper_cards}
</main>
<script>
${scripts}
</script>
</body>
</html>
"#;

/// One paper card. Variables: `id`, `title`, `authors`, `year`,
/// `tags_json`, `thumbnail`, `tags_html`, `links_html`, `abstract_html`.
pub const DEFAULT_CARD_TEMPLATE: &str = r#"<article class="paper-card" data-id="${id}" data-year="${year}" data-tags='${tags_json}'>
  <img class="paper-thumbnail" src="${thumbnail}" alt="${title}" loading="lazy">
  <div class="paper-body">
    <h2 class="paper-title">${title}</h2>
    <p class="paper-authors">${authors}</p>
    <div class="paper-tags">
${tags_html}
    </div>
    <div class="paper-links">
${links_html}
    </div>
  </div>
</article>
"#;
