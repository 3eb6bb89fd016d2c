//! Best-effort URL repair for image references discovered in HTML.
//!
//! Pages routinely declare image sources as path-relative, root-relative, or
//! protocol-relative references. These helpers repair such a reference into an
//! absolute URL relative to the page it was found on. This is deliberately a
//! string repair, not a full URL resolver: no percent-encoding, no
//! query-string handling, no validation of the result.

use crate::patterns::{ABSOLUTE_SCHEME, PAGE_ORIGIN};

/// Repair a discovered image URL into absolute, schema-correct form.
///
/// * An input already starting with `http://` or `https://` is returned
///   unchanged.
/// * A protocol-relative input (`//host/...`) is given an `https:` scheme.
/// * Anything else is joined onto the origin derived from `page_url`, with a
///   `/` separator inserted when the input does not start with one.
///
/// When `page_url` itself has no matchable origin the derived prefix is
/// empty, yielding a path-only string. Documented limitation, not an error.
#[must_use]
pub fn normalize_image_url(page_url: &str, raw_url: &str) -> String {
    if ABSOLUTE_SCHEME.is_match(raw_url) {
        return raw_url.to_string();
    }

    if raw_url.starts_with("//") {
        return format!("https:{raw_url}");
    }

    let origin = page_origin(page_url);
    if raw_url.starts_with('/') {
        format!("{origin}{raw_url}")
    } else {
        format!("{origin}/{raw_url}")
    }
}

/// Scheme-plus-host prefix of `page_url`, or empty when none can be found.
#[must_use]
pub fn page_origin(page_url: &str) -> String {
    PAGE_ORIGIN
        .find(page_url)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Derive a display name from a normalized URL: the last non-empty
/// `/`-delimited segment.
///
/// Empty segments from consecutive delimiters or a trailing slash are
/// filtered out before taking the last one, so `.../a/b/` yields `"b"`.
#[must_use]
pub fn candidate_name(url: &str) -> String {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_is_untouched() {
        assert_eq!(
            normalize_image_url("https://ex.com/page", "http://a/b.png"),
            "http://a/b.png"
        );
        assert_eq!(
            normalize_image_url("https://ex.com/page", "https://cdn.ex.com/b.png"),
            "https://cdn.ex.com/b.png"
        );
    }

    #[test]
    fn protocol_relative_url_gets_https_scheme() {
        let result = normalize_image_url("https://ex.com/page", "//cdn.com/x.png");
        assert_eq!(result, "https://cdn.com/x.png");
        assert!(result.starts_with("https:"));
    }

    #[test]
    fn root_relative_url_joins_page_origin() {
        assert_eq!(
            normalize_image_url("https://ex.com/page", "/img/x.png"),
            "https://ex.com/img/x.png"
        );
    }

    #[test]
    fn bare_relative_url_gets_separator_inserted() {
        assert_eq!(
            normalize_image_url("https://ex.com/page", "img/x.png"),
            "https://ex.com/img/x.png"
        );
    }

    #[test]
    fn origin_less_page_url_yields_path_only_result() {
        assert_eq!(normalize_image_url("not a url", "img/x.png"), "/img/x.png");
        assert_eq!(normalize_image_url("", "/img/x.png"), "/img/x.png");
    }

    #[test]
    fn origin_includes_subdomains_and_port() {
        assert_eq!(
            page_origin("https://media.news.ex.com/articles/1"),
            "https://media.news.ex.com"
        );
        assert_eq!(page_origin("http://127.0.0.1:9090/p"), "http://127.0.0.1:9090");
        assert_eq!(page_origin("/relative"), "");
    }

    #[test]
    fn candidate_name_takes_last_segment() {
        assert_eq!(candidate_name("https://ex.com/img/x.png"), "x.png");
        assert_eq!(candidate_name("https://cdn.co/hero.jpg"), "hero.jpg");
    }

    #[test]
    fn candidate_name_ignores_trailing_and_doubled_slashes() {
        assert_eq!(candidate_name("https://ex.com/a/b/"), "b");
        assert_eq!(candidate_name("https://ex.com/a//b"), "b");
    }

    #[test]
    fn candidate_name_of_empty_url_is_empty() {
        assert_eq!(candidate_name(""), "");
        assert_eq!(candidate_name("///"), "");
    }
}
