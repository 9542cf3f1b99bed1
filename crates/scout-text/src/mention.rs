use std::sync::OnceLock;

use regex::Regex;

fn mention_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<@[^>]+>").expect("mention pattern is valid"))
}

/// Strip the first `<@...>` mention token from raw trigger text and trim the result.
///
/// Later mention tokens are left in place.
pub fn normalize_mention_text(raw: &str) -> String {
    mention_pattern().replace(raw, "").trim().to_string()
}
