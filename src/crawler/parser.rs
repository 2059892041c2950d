//! Link extractor for HTML pages
//!
//! Extracts canonicalized outbound links from anchor elements. Hrefs that
//! fail to canonicalize (unsupported schemes, malformed references) are
//! dropped with a debug log rather than treated as errors — a bad href on a
//! page is not evidence the page is unreachable.

use crate::url::canonicalize;
use scraper::{Html, Selector};
use url::Url;

/// Extracts all canonicalized links from anchor `href` attributes
///
/// Relative references are resolved against `base`. Duplicates are left in;
/// deduplication is the dispatcher's job.
///
/// # Example
///
/// ```
/// use linkrot::crawler::extract_links;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/").unwrap();
/// let html = r#"<html><body><a href="/a?ref=nav">A</a></body></html>"#;
/// let links = extract_links(html, &base);
/// assert_eq!(links[0].as_str(), "https://example.com/a");
/// ```
pub fn extract_links(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let mut links = Vec::new();
    if let Ok(anchors) = Selector::parse("a[href]") {
        for element in document.select(&anchors) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            match canonicalize(href.trim(), Some(base)) {
                Ok(url) => links.push(url),
                Err(e) => {
                    tracing::debug!("Skipping href {:?}: {}", href, e);
                }
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/docs/page").unwrap()
    }

    fn links_of(html: &str) -> Vec<String> {
        extract_links(html, &base())
            .into_iter()
            .map(|u| u.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_extract_absolute_link() {
        let links = links_of(r#"<html><body><a href="https://other.example/x">x</a></body></html>"#);
        assert_eq!(links, vec!["https://other.example/x"]);
    }

    #[test]
    fn test_extract_root_relative_link() {
        let links = links_of(r#"<html><body><a href="/about">about</a></body></html>"#);
        assert_eq!(links, vec!["https://example.com/about"]);
    }

    #[test]
    fn test_extract_path_relative_link() {
        let links = links_of(r#"<html><body><a href="guide">guide</a></body></html>"#);
        assert_eq!(links, vec!["https://example.com/docs/guide"]);
    }

    #[test]
    fn test_query_and_fragment_stripped() {
        let links = links_of(r#"<html><body><a href="/a?q=1#top">a</a></body></html>"#);
        assert_eq!(links, vec!["https://example.com/a"]);
    }

    #[test]
    fn test_skip_mailto_and_javascript() {
        let links = links_of(
            r#"<html><body>
            <a href="mailto:me@example.com">mail</a>
            <a href="javascript:void(0)">js</a>
            <a href="/kept">kept</a>
            </body></html>"#,
        );
        assert_eq!(links, vec!["https://example.com/kept"]);
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        let links = links_of(r#"<html><body><a name="top">anchor</a></body></html>"#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_duplicates_preserved() {
        let links = links_of(
            r#"<html><body><a href="/a">one</a><a href="/a?ref=x">two</a></body></html>"#,
        );
        assert_eq!(
            links,
            vec!["https://example.com/a", "https://example.com/a"]
        );
    }

    #[test]
    fn test_nested_markup() {
        let links = links_of(
            r#"<html><body><nav><ul><li><a href="/deep">deep</a></li></ul></nav></body></html>"#,
        );
        assert_eq!(links, vec!["https://example.com/deep"]);
    }

    #[test]
    fn test_no_links() {
        assert!(links_of("<html><body>plain text</body></html>").is_empty());
    }

    #[test]
    fn test_malformed_html_is_tolerated() {
        // html5ever recovers from broken markup; extraction still works.
        let links = links_of(r#"<html><body><div><a href="/a">a</body>"#);
        assert_eq!(links, vec!["https://example.com/a"]);
    }
}
