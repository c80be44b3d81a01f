//! Page shell assembly.
//!
//! Page shells are embedded HTML documents with empty container elements
//! (`<div id="heroSection"></div>`). [`inject`] writes a rendered
//! fragment into a named container; a missing container is a logged
//! no-op, never an error.

use crate::log;

/// Homepage shell with one container per portfolio section.
pub const INDEX_SHELL: &str = include_str!("../embed/index.html");

/// Blog listing shell with the `articlesGrid` container.
pub const BLOG_SHELL: &str = include_str!("../embed/blog.html");

/// Article detail shell with the `articleWrapper` container.
pub const ARTICLE_SHELL: &str = include_str!("../embed/article.html");

/// Write `fragment` into the container with the given element id.
///
/// Containers in shells are empty elements, so inserting directly after
/// the opening tag is equivalent to replacing the content. When the
/// container is absent the shell is returned unchanged.
pub fn inject(shell: &str, container_id: &str, fragment: &str) -> String {
    match try_inject(shell, container_id, fragment) {
        Some(page) => page,
        None => {
            log!("render"; "container `{container_id}` not found, skipping");
            shell.to_owned()
        }
    }
}

/// Fill the `{title}` placeholder of a shell.
pub fn with_title(shell: &str, title: &str) -> String {
    shell.replace("{title}", &crate::utils::html::escape_html(title))
}

fn try_inject(shell: &str, container_id: &str, fragment: &str) -> Option<String> {
    let needle = format!(r#"id="{container_id}""#);
    let at = shell.find(&needle)?;
    let open_end = at + shell[at..].find('>')? + 1;

    let mut page = String::with_capacity(shell.len() + fragment.len());
    page.push_str(&shell[..open_end]);
    page.push_str(fragment);
    page.push_str(&shell[open_end..]);
    Some(page)
}
