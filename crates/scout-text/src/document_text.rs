//! Best-effort plain-text extraction from tracker rich-document bodies.
//!
//! A body is a `{content: [block, ...]}` tree where each block carries its own
//! `content` array of inline nodes and inline nodes may carry `text`. Only those
//! two levels are read; anything else in the tree is ignored.

use serde_json::Value;

/// Concatenate the `text` of every inline node, space-joined, blocks in document order.
///
/// Returns an empty string when the body is missing or not shaped like a document.
pub fn extract_document_text(document: &Value) -> String {
    try_extract_document_text(document).unwrap_or_default()
}

fn try_extract_document_text(document: &Value) -> Option<String> {
    let blocks = document.get("content")?.as_array()?;
    let mut fragments = Vec::new();
    for block in blocks {
        let Some(inlines) = block.get("content").and_then(Value::as_array) else {
            continue;
        };
        fragments.extend(
            inlines
                .iter()
                .filter_map(|inline| inline.get("text").and_then(Value::as_str)),
        );
    }
    Some(fragments.join(" "))
}
