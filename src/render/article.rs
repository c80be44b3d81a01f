//! Article detail views: one per loader outcome.

use crate::content::Article;
use crate::utils::html::escape_html;

/// Full article view: header metadata followed by the converted body.
///
/// `body_html` is trusted converter output; everything else is escaped.
pub fn detail(article: &Article, body_html: &str) -> String {
    format!(
        r#"<article class="article-header">
  <div class="article-meta">
    <span class="article-date">{date}</span>
    <span class="article-tag">{tag}</span>
  </div>
  <h1 class="article-title">{title}</h1>
</article>
<div class="article-content">
{body_html}
</div>"#,
        date = escape_html(&article.date),
        tag = escape_html(&article.tag),
        title = escape_html(&article.title),
    )
}

/// Unknown article id: a message with a way back to the listing.
pub fn not_found() -> String {
    r#"<div class="error">
  <h2>Article not found</h2>
  <p><a href="/blog/">Return to blog</a></p>
</div>"#
        .to_owned()
}

/// Load failure: diagnostic message enumerating likely causes.
pub fn load_error(message: &str) -> String {
    format!(
        r#"<div class="error">
  <h2>Failed to load article</h2>
  <p>{message}</p>
  <p>This could be because:</p>
  <ul class="error-causes">
    <li>The markdown file doesn't exist yet</li>
    <li>The file path is incorrect</li>
    <li>There's a network error</li>
  </ul>
  <p><a href="/blog/">Return to blog</a></p>
</div>"#,
        message = escape_html(message),
    )
}
