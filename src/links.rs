//! URL extraction from free-form text.

use std::sync::LazyLock;

use regex::Regex;

/// Every `http://` or `https://` URL in `text`, in order of appearance.
///
/// Trailing sentence punctuation (`. , ; : ! ? )`) is not considered part
/// of a URL, so `"see https://example.com."` yields `https://example.com`.
#[must_use]
pub fn links(text: &str) -> Vec<&str> {
    static LINK_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"https?://\S*[^\s.,;:!?)]").expect("valid regex"));

    LINK_RE.find_iter(text).map(|m| m.as_str()).collect()
}
