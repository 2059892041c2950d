use crate::UrlError;
use url::Url;

/// Canonicalizes a URL string into the form used as the visited-set key
///
/// # Canonicalization Steps
///
/// 1. Parse the string; relative references are resolved against `base`
/// 2. Strip the query string
/// 3. Strip the fragment
///
/// The resulting string form (scheme + host + path) identifies a page: two
/// hrefs that canonicalize to the same string are the same visited entity.
/// Canonicalization is idempotent — feeding a canonical URL back through
/// yields an identical string.
///
/// # Arguments
///
/// * `href` - The URL string to canonicalize (absolute or relative)
/// * `base` - Base URL for resolving relative references; a relative href
///   with no base fails with [`UrlError::MissingBase`]
///
/// # Examples
///
/// ```
/// use linkrot::url::canonicalize;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/").unwrap();
/// let url = canonicalize("page?utm_source=x#intro", Some(&base)).unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs/page");
///
/// assert!(canonicalize("no-base", None).is_err());
/// ```
pub fn canonicalize(href: &str, base: Option<&Url>) -> Result<Url, UrlError> {
    let mut url = match Url::parse(href) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = base.ok_or(UrlError::MissingBase)?;
            base.join(href)
                .map_err(|e| UrlError::Parse(format!("{href}: {e}")))?
        }
        Err(e) => return Err(UrlError::Parse(format!("{href}: {e}"))),
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::UnsupportedScheme(url.scheme().to_string()));
    }

    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
