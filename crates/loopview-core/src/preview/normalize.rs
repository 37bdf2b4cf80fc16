//! Local dev-server address recognition.
//!
//! Turns loose address strings copied out of terminal output (`localhost:3000`,
//! `[::1]:4000`, `http://127.0.0.1:5000/app,`) into one canonical
//! `scheme://host[:port][path]` string so that repeated detections of the same
//! server compare equal.

use std::sync::LazyLock;

use regex::Regex;

/// Characters stripped from the end of a candidate before matching, so that
/// addresses embedded in prose or log lines still match.
const TRAILING_PUNCTUATION: [char; 4] = [')', ',', '.', ';'];

/// Whole-string pattern for a loopback address.
///
/// Octets of `127.x.x.x` are matched by digit count only (1-3 digits), not
/// range-checked. `[0-9]` is used over `\d` so non-ASCII digits never match,
/// and case folding is ASCII-only so look-alikes such as `ſ` never fold to `s`.
static LOCALHOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:((?i-u:https?))://)?((?i-u:localhost)|0\.0\.0\.0|\[::1\]|::1|127\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})(?::([0-9]{2,5}))?(/.*)?$",
    )
    .expect("Invalid localhost pattern")
});

/// Normalize a candidate string into a canonical local preview URL.
///
/// Returns `None` when the cleaned candidate is not, in its entirety, a
/// loopback address. Hosts spelled `localhost`, `0.0.0.0`, `::1` or `[::1]`
/// are rewritten to `localhost`; `127.x.x.x` literals are kept verbatim. A
/// missing scheme defaults to `http`.
pub fn normalize_localhost_url(input: &str) -> Option<String> {
    let cleaned = input.trim().trim_end_matches(TRAILING_PUNCTUATION);
    let caps = LOCALHOST_PATTERN.captures(cleaned)?;

    let scheme = caps
        .get(1)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_else(|| "http".to_string());

    let raw_host = caps.get(2)?.as_str();
    let host = if raw_host.starts_with("127.") {
        raw_host
    } else {
        "localhost"
    };

    let mut url = format!("{}://{}", scheme, host);
    if let Some(port) = caps.get(3) {
        url.push(':');
        url.push_str(port.as_str());
    }
    if let Some(path) = caps.get(4) {
        url.push_str(path.as_str());
    }

    Some(url)
}

/// Check whether a candidate string denotes a local dev-server address.
pub fn is_localhost_url(url: &str) -> bool {
    normalize_localhost_url(url).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_localhost_with_port() {
        assert_eq!(
            normalize_localhost_url("localhost:3000"),
            Some("http://localhost:3000".to_string())
        );
    }

    #[test]
    fn test_unspecified_address_rewritten_to_localhost() {
        assert_eq!(
            normalize_localhost_url("0.0.0.0:8080/"),
            Some("http://localhost:8080/".to_string())
        );
    }

    #[test]
    fn test_loopback_literal_keeps_path_query_and_fragment() {
        assert_eq!(
            normalize_localhost_url("127.0.0.1:5000/app?foo=bar#hash"),
            Some("http://127.0.0.1:5000/app?foo=bar#hash".to_string())
        );
    }

    #[test]
    fn test_bracketed_ipv6_loopback() {
        assert_eq!(
            normalize_localhost_url("[::1]:4000"),
            Some("http://localhost:4000".to_string())
        );
    }

    #[test]
    fn test_bare_ipv6_loopback() {
        assert_eq!(
            normalize_localhost_url("::1:4000"),
            Some("http://localhost:4000".to_string())
        );
        assert_eq!(
            normalize_localhost_url("::1"),
            Some("http://localhost".to_string())
        );
    }

    #[test]
    fn test_https_scheme_preserved() {
        assert_eq!(
            normalize_localhost_url("https://localhost:3001/"),
            Some("https://localhost:3001/".to_string())
        );
    }

    #[test]
    fn test_scheme_and_host_are_case_insensitive() {
        assert_eq!(
            normalize_localhost_url("HTTPS://LocalHost:3001/Docs"),
            Some("https://localhost:3001/Docs".to_string())
        );
    }

    #[test]
    fn test_trailing_comma_stripped() {
        assert_eq!(
            normalize_localhost_url("http://localhost:3000,"),
            Some("http://localhost:3000".to_string())
        );
    }

    #[test]
    fn test_trailing_punctuation_run_stripped() {
        assert_eq!(
            normalize_localhost_url("  localhost:5173/);.  "),
            Some("http://localhost:5173/".to_string())
        );
    }

    #[test]
    fn test_non_loopback_host_with_port_rejected() {
        assert_eq!(
            normalize_localhost_url("External: https://example.com:3000/path"),
            None
        );
        assert_eq!(normalize_localhost_url("https://example.com:3000/path"), None);
        assert_eq!(normalize_localhost_url("192.168.1.10:3000"), None);
    }

    #[test]
    fn test_embedded_address_not_extracted() {
        assert_eq!(normalize_localhost_url("see localhost:3000"), None);
        assert_eq!(normalize_localhost_url("localhost:3000 is ready"), None);
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        assert_eq!(normalize_localhost_url(""), None);
        assert_eq!(normalize_localhost_url("   "), None);
        assert_eq!(normalize_localhost_url(",.;)"), None);
    }

    #[test]
    fn test_host_without_port() {
        assert_eq!(
            normalize_localhost_url("localhost"),
            Some("http://localhost".to_string())
        );
        assert_eq!(
            normalize_localhost_url("localhost/health"),
            Some("http://localhost/health".to_string())
        );
    }

    #[test]
    fn test_port_digit_count_bounds() {
        assert_eq!(normalize_localhost_url("localhost:8"), None);
        assert_eq!(normalize_localhost_url("localhost:123456"), None);
        assert_eq!(
            normalize_localhost_url("localhost:80"),
            Some("http://localhost:80".to_string())
        );
        assert_eq!(
            normalize_localhost_url("localhost:65535"),
            Some("http://localhost:65535".to_string())
        );
    }

    #[test]
    fn test_loopback_octets_not_range_checked() {
        assert_eq!(
            normalize_localhost_url("127.999.0.1:3000"),
            Some("http://127.999.0.1:3000".to_string())
        );
        assert_eq!(normalize_localhost_url("127.1234.0.1:3000"), None);
        assert_eq!(normalize_localhost_url("127.0.1:3000"), None);
    }

    #[test]
    fn test_loopback_literal_digits_preserved() {
        for input in ["127.0.0.1", "127.1.2.3:8000", "http://127.10.20.30/x"] {
            let url = normalize_localhost_url(input).unwrap();
            let host = url
                .split("://")
                .nth(1)
                .and_then(|rest| rest.split([':', '/']).next())
                .unwrap();
            assert!(input.contains(host), "{} lost its host in {}", input, url);
        }
    }

    #[test]
    fn test_other_loopback_spellings_map_to_localhost() {
        for input in [
            "localhost:3000",
            "LOCALHOST:3000",
            "0.0.0.0:3000",
            "::1:3000",
            "[::1]:3000",
            "https://[::1]:3000",
        ] {
            let url = normalize_localhost_url(input).unwrap();
            assert!(
                url.ends_with("://localhost:3000"),
                "{} normalized to {}",
                input,
                url
            );
        }
    }

    #[test]
    fn test_other_schemes_rejected() {
        assert_eq!(normalize_localhost_url("ftp://localhost:21"), None);
        assert_eq!(normalize_localhost_url("ws://localhost:3000"), None);
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert_eq!(normalize_localhost_url("localhost:３０００"), None);
    }

    #[test]
    fn test_unicode_case_folding_rejected() {
        // U+017F folds to 's' under Unicode rules but is not an ASCII letter
        assert_eq!(normalize_localhost_url("http\u{17F}://localhost:3000"), None);
        assert_eq!(normalize_localhost_url("localho\u{17F}t:3000"), None);
        assert_eq!(normalize_localhost_url("LOCALHO\u{17F}T:3000"), None);
        assert!(!is_localhost_url("http\u{17F}://127.0.0.1:3000"));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = [
            "localhost:3000",
            "0.0.0.0:8080/",
            "127.0.0.1:5000/app?foo=bar#hash",
            "[::1]:4000",
            "https://localhost:3001/",
            "http://localhost:3000,",
            "HTTP://LOCALHOST",
        ];
        for input in inputs {
            let once = normalize_localhost_url(input).unwrap();
            let twice = normalize_localhost_url(&once);
            assert_eq!(twice.as_deref(), Some(once.as_str()), "input {}", input);
        }
    }

    #[test]
    fn test_is_localhost_url_agrees_with_normalize() {
        let inputs = [
            "",
            "localhost:3000",
            "example.com",
            "127.0.0.1",
            "External: https://example.com:3000/path",
            "[::1]",
            "http://localhost:3000,",
            "localhost:1",
        ];
        for input in inputs {
            assert_eq!(
                is_localhost_url(input),
                normalize_localhost_url(input).is_some(),
                "input {:?}",
                input
            );
        }
    }
}
