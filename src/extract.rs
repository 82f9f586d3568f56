use std::sync::LazyLock;

use regex::Regex;

// Ordered most specific first: a numeric /idNNN path must win over the
// generic username path on the same host, and the bare-handle fallback
// always comes last.
const PATTERNS: [&str; 6] = [
    r"ovk\.to/id([0-9]+)",
    r"openvk\.su/id([0-9]+)",
    r"ovk\.to/([A-Za-z0-9_]+)",
    r"openvk\.su/([A-Za-z0-9_]+)",
    r"id([0-9]+)",
    r"^([A-Za-z0-9_]+)$",
];

static MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

pub fn extract_identifier(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if is_numeric(input) {
        return Some(input.to_string());
    }

    for matcher in MATCHERS.iter() {
        if let Some(group) = matcher.captures(input).and_then(|captures| captures.get(1)) {
            return Some(group.as_str().to_string());
        }
    }

    None
}

pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}
