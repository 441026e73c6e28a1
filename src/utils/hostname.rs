//! Bare hostname extraction from a raw submitted URL.

use regex::Regex;
use std::sync::LazyLock;

/// Leading `http://` or `https://`, scheme matched case-insensitively.
static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Strips the scheme and everything from the first `/` onward.
///
/// This is deliberately not a URL parser. Ports, credentials and query strings
/// that come before the first slash stay in the result, which then fails
/// resolution. An input without a scheme is treated as starting with the host.
///
/// # Examples
///
/// ```
/// use shorturl::utils::hostname::extract_hostname;
///
/// assert_eq!(extract_hostname("https://www.example.com/page"), "www.example.com");
/// assert_eq!(extract_hostname("HTTP://Example.com"), "Example.com");
/// assert_eq!(extract_hostname("example.com/a/b"), "example.com");
/// ```
pub fn extract_hostname(raw_url: &str) -> &str {
    let rest = match SCHEME_REGEX.find(raw_url) {
        Some(m) => &raw_url[m.end()..],
        None => raw_url,
    };

    match rest.find('/') {
        Some(slash) => &rest[..slash],
        None => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_https_and_path() {
        assert_eq!(
            extract_hostname("https://www.example.com/page"),
            "www.example.com"
        );
    }

    #[test]
    fn test_strips_http_without_path() {
        assert_eq!(extract_hostname("http://example.com"), "example.com");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(extract_hostname("HtTpS://example.com/x"), "example.com");
    }

    #[test]
    fn test_trailing_slash_only() {
        assert_eq!(extract_hostname("https://example.com/"), "example.com");
    }

    #[test]
    fn test_no_scheme() {
        assert_eq!(extract_hostname("example.com/path?q=1"), "example.com");
    }

    #[test]
    fn test_other_scheme_is_not_stripped() {
        assert_eq!(extract_hostname("ftp://example.com/file"), "ftp:");
    }

    #[test]
    fn test_port_is_kept() {
        assert_eq!(
            extract_hostname("https://example.com:8080/x"),
            "example.com:8080"
        );
    }

    #[test]
    fn test_scheme_only_in_the_middle_is_kept() {
        assert_eq!(
            extract_hostname("xhttps://example.com"),
            "xhttps:"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_hostname(""), "");
        assert_eq!(extract_hostname("https://"), "");
        assert_eq!(extract_hostname("https:///path"), "");
    }
}
