//! Text transformations applied between chat triggers, tracker payloads, and outbound messages.
pub mod document_text;
pub mod markup;
pub mod mention;

pub use document_text::extract_document_text;
pub use markup::{convert_markdown_to_mrkdwn, markup_rules, MarkupRule};
pub use mention::normalize_mention_text;
