//! Blog listing views: the article card grid and its empty state.

use crate::content::Article;
use crate::utils::html::escape_html;

/// Placeholder glyph shown when an article has no card image.
const IMAGE_PLACEHOLDER: &str = "📊";

/// Render the article grid, or the empty state when no articles exist.
pub fn article_grid(articles: &[Article]) -> String {
    if articles.is_empty() {
        return empty_state();
    }

    articles
        .iter()
        .map(article_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One article card linking to its detail page.
pub fn article_card(article: &Article) -> String {
    format!(
        r#"<a href="/article.html?id={id}" class="article-card">
  {image}
  <div class="article-content">
    <div class="article-meta">
      <span class="article-date">{date}</span>
      <span class="article-tag">{tag}</span>
    </div>
    <h2 class="article-title">{title}</h2>
    <p class="article-excerpt">{excerpt}</p>
    <span class="article-read-more">Read More</span>
  </div>
</a>"#,
        id = urlencoding::encode(&article.id),
        image = card_image(article),
        date = escape_html(&article.date),
        tag = escape_html(&article.tag),
        title = escape_html(&article.title),
        excerpt = escape_html(&article.excerpt),
    )
}

/// Card image, falling back to a placeholder glyph.
fn card_image(article: &Article) -> String {
    match &article.image {
        Some(url) => format!(
            r#"<div class="article-image"><img src="{}" alt="{}"></div>"#,
            escape_html(url),
            escape_html(&article.title),
        ),
        None => format!(r#"<div class="article-image">{IMAGE_PLACEHOLDER}</div>"#),
    }
}

fn empty_state() -> String {
    r#"<div class="no-articles">No articles yet. Check back soon!</div>"#.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_article(id: &str, image: Option<&str>) -> Article {
        Article {
            id: id.to_owned(),
            title: format!("Title of {id}"),
            date: "2024-01-15".to_owned(),
            tag: "rag".to_owned(),
            excerpt: "A short excerpt.".to_owned(),
            markdown_file: PathBuf::from("a.md"),
            image: image.map(String::from),
            order: 1,
        }
    }

    #[test]
    fn test_grid_renders_all_cards() {
        let articles = vec![make_article("a__one", None), make_article("a__two", None)];
        let html = article_grid(&articles);

        assert_eq!(html.matches(r#"class="article-card""#).count(), 2);
        assert!(html.contains("Title of a__one"));
        assert!(html.contains("Title of a__two"));
    }

    #[test]
    fn test_empty_grid_renders_empty_state() {
        let html = article_grid(&[]);
        assert!(html.contains("No articles yet"));
    }

    #[test]
    fn test_card_links_by_query_parameter() {
        let html = article_card(&make_article("ddd__01-intro", None));
        assert!(html.contains(r#"href="/article.html?id=ddd__01-intro""#));
    }

    #[test]
    fn test_card_image_fallback_glyph() {
        let html = article_card(&make_article("a__b", None));
        assert!(html.contains(IMAGE_PLACEHOLDER));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_card_image_used_when_present() {
        let html = article_card(&make_article("a__b", Some("/assets/images/cover.png")));
        assert!(html.contains(r#"<img src="/assets/images/cover.png""#));
    }

    #[test]
    fn test_card_meta_shows_date_and_tag() {
        let html = article_card(&make_article("a__b", None));
        assert!(html.contains(r#"<span class="article-date">2024-01-15</span>"#));
        assert!(html.contains(r#"<span class="article-tag">rag</span>"#));
    }
}
