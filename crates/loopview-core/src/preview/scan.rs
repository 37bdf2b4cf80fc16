//! Helpers for pulling preview URL candidates out of terminal output.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize_localhost_url;

/// CSI sequences (colors, cursor movement), OSC sequences (titles,
/// hyperlinks) terminated by BEL or ST, and two-byte escapes.
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b[@-Z\\-_]")
        .expect("Invalid ANSI escape pattern")
});

const LEADING_WRAPPERS: [char; 5] = ['(', '<', '"', '\'', '`'];
const TRAILING_WRAPPERS: [char; 8] = ['>', '"', '\'', '`', ')', ',', '.', ';'];

/// Remove terminal escape sequences from a chunk of output.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Split a line into whitespace-separated tokens with surrounding quotes and
/// brackets removed. A bracketed IPv6 loopback host keeps its brackets.
pub fn candidate_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
        .map(|token| {
            let token = token.trim_start_matches(LEADING_WRAPPERS);
            match token.strip_prefix('[') {
                Some(inner) if !token.starts_with("[::1]") => inner
                    .trim_end_matches(TRAILING_WRAPPERS)
                    .trim_end_matches(']')
                    .trim_end_matches(TRAILING_WRAPPERS),
                _ => token.trim_end_matches(TRAILING_WRAPPERS),
            }
        })
        .filter(|token| !token.is_empty())
}

/// Find every local preview URL mentioned in `text`.
///
/// Results are canonical, deduplicated, and ordered by first appearance.
pub fn find_localhost_urls(text: &str, strip_escapes: bool) -> Vec<String> {
    let text = if strip_escapes {
        strip_ansi(text)
    } else {
        Cow::Borrowed(text)
    };

    let mut seen = HashSet::new();
    text.lines()
        .flat_map(candidate_tokens)
        .filter_map(normalize_localhost_url)
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
