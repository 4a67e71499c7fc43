//! URL Utility Functions
//!
//! Host extraction for platform detection and resolution of media
//! addresses pulled out of `<img>` elements.

use url::Url;

/// Parse a page URL, accepting only absolute `http`/`https` URLs with a host.
#[must_use]
pub fn parse_page_url(url_str: &str) -> Option<Url> {
    let s = url_str.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Extract the hostname from a page URL.
///
/// # Returns
/// * The hostname, or `None` if the URL is not absolute
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    parse_page_url(url_str).and_then(|url| url.host_str().map(str::to_string))
}

/// Resolve an image address against the page URL.
///
/// Absolute and `data:`/`blob:` addresses are returned unchanged, as is
/// everything when no base is known or the join fails.
#[must_use]
pub fn resolve_media_url(src: &str, base: Option<&Url>) -> String {
    let src = src.trim();

    if src.is_empty() || src.starts_with("data:") || src.starts_with("blob:") {
        return src.to_string();
    }

    if Url::parse(src).is_ok() {
        return src.to_string();
    }

    match base.map(|b| b.join(src)) {
        Some(Ok(resolved)) => resolved.to_string(),
        _ => src.to_string(),
    }
}

/// First candidate URL of a `srcset` attribute.
///
/// `"a.jpg 320w, b.jpg 640w"` yields `a.jpg`.
#[must_use]
pub fn first_srcset_candidate(srcset: &str) -> Option<&str> {
    srcset
        .split(',')
        .filter_map(|candidate| candidate.split_whitespace().next())
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_page_url_requires_http_scheme() {
        assert!(parse_page_url("https://www.instagram.com/someone/").is_some());
        assert!(parse_page_url("ftp://www.instagram.com/").is_none());
        assert!(parse_page_url("www.instagram.com").is_none());
        assert!(parse_page_url("").is_none());
    }

    #[test]
    fn extract_hostname_returns_host() {
        assert_eq!(
            extract_hostname("https://m.facebook.com/profile.php?id=4"),
            Some("m.facebook.com".to_string())
        );
        assert_eq!(extract_hostname("/relative/path"), None);
    }

    #[test]
    fn resolve_media_url_joins_relative_paths() {
        let base = Url::parse("https://www.instagram.com/someone/").ok();
        assert_eq!(
            resolve_media_url("/media/a.jpg", base.as_ref()),
            "https://www.instagram.com/media/a.jpg"
        );
    }

    #[test]
    fn resolve_media_url_keeps_absolute_and_data_urls() {
        let base = Url::parse("https://www.instagram.com/").ok();
        assert_eq!(
            resolve_media_url("https://cdn.example.com/a.jpg", base.as_ref()),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(resolve_media_url("data:image/png;base64,AAA", base.as_ref()), "data:image/png;base64,AAA");
    }

    #[test]
    fn resolve_media_url_without_base_is_verbatim() {
        assert_eq!(resolve_media_url("/media/a.jpg", None), "/media/a.jpg");
    }

    #[test]
    fn srcset_first_candidate() {
        assert_eq!(first_srcset_candidate("a.jpg 320w, b.jpg 640w"), Some("a.jpg"));
        assert_eq!(first_srcset_candidate("  "), None);
    }
}
