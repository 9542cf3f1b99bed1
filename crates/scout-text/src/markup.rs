//! Lightweight Markdown to Slack mrkdwn conversion.
//!
//! The conversion is a fixed sequence of regex rewrites, not a Markdown parse.
//! Rules run in table order and each rule sees the output of the previous one:
//!
//! 1. `header`: `#`, `##`, `###` lines become bold.
//! 2. `bullet`: lines starting with `-` or `*` become `•` bullets.
//! 3. `bold`: `**text**` becomes bold.
//! 4. `italic`: `*text*` becomes `_text_`.
//! 5. `code`: spans fenced by one to three backticks become single-backtick spans.
//! 6. `bold_marker`: the placeholder emitted by `header` and `bold` becomes `*`.
//! 7. `blank_lines`: runs of blank lines collapse to a single newline.
//!
//! Headers and bold both target `*`, which is also the source italic delimiter.
//! They emit [`BOLD_MARKER`] instead, so the italic rule cannot re-read them, and
//! the marker is only turned into `*` after every span rule has run. Nested or
//! malformed markup can still come out partially converted.

use std::sync::OnceLock;

use regex::Regex;

/// Placeholder for target-dialect bold delimiters until span rewriting is done.
const BOLD_MARKER: &str = "\u{E000}";

/// One ordered rewrite step of the mrkdwn conversion.
#[derive(Debug)]
pub struct MarkupRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl MarkupRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("markup rule pattern is valid"),
            replacement,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement)
            .into_owned()
    }
}

/// The conversion rules, in the order they are applied.
pub fn markup_rules() -> &'static [MarkupRule] {
    static RULES: OnceLock<Vec<MarkupRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            MarkupRule::new("header", r"(?m)^#{1,3}[ \t]+(.+?)[ \t]*$", "\u{E000}${1}\u{E000}"),
            MarkupRule::new("bullet", r"(?m)^([ \t]*)[-*][ \t]+", "${1}• "),
            MarkupRule::new("bold", r"\*\*(.+?)\*\*", "\u{E000}${1}\u{E000}"),
            MarkupRule::new("italic", r"\*([^*\n]+?)\*", "_${1}_"),
            MarkupRule::new("code", r"`{1,3}([^`]+?)`{1,3}", "`${1}`"),
            MarkupRule::new("bold_marker", BOLD_MARKER, "*"),
            MarkupRule::new("blank_lines", r"\n(?:[ \t]*\n)+", "\n"),
        ]
    })
}

/// Convert lightweight Markdown into Slack mrkdwn by running every rule in order.
pub fn convert_markdown_to_mrkdwn(input: &str) -> String {
    markup_rules()
        .iter()
        .fold(input.to_string(), |text, rule| rule.apply(&text))
}
