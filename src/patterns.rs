//! Compiled regex patterns for URL repair.
//!
//! All patterns are compiled once at first use via `LazyLock` and shared
//! read-only thereafter.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches URLs that already carry an explicit http or https scheme.
pub static ABSOLUTE_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("ABSOLUTE_SCHEME regex"));

/// Captures the origin at the start of a page URL: scheme, host with any
/// subdomains, and an optional port.
pub static PAGE_ORIGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*(?::\d+)?")
        .expect("PAGE_ORIGIN regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_scheme_matches_http_and_https_only() {
        assert!(ABSOLUTE_SCHEME.is_match("http://example.com/a.png"));
        assert!(ABSOLUTE_SCHEME.is_match("https://example.com/a.png"));
        assert!(!ABSOLUTE_SCHEME.is_match("//cdn.example.com/a.png"));
        assert!(!ABSOLUTE_SCHEME.is_match("ftp://example.com/a.png"));
        assert!(!ABSOLUTE_SCHEME.is_match("/a.png"));
    }

    #[test]
    fn page_origin_captures_scheme_and_host() {
        let origin = PAGE_ORIGIN
            .find("https://news.example.com/articles/1")
            .map(|m| m.as_str());
        assert_eq!(origin, Some("https://news.example.com"));
    }

    #[test]
    fn page_origin_keeps_port() {
        let origin = PAGE_ORIGIN
            .find("http://127.0.0.1:8080/page")
            .map(|m| m.as_str());
        assert_eq!(origin, Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn page_origin_absent_for_relative_input() {
        assert!(PAGE_ORIGIN.find("not a url").is_none());
        assert!(PAGE_ORIGIN.find("/relative/path").is_none());
    }
}
