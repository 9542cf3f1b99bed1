use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Uniform result shape for web hits and tracker issues alike.
pub struct SearchResultItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Keep the first `cap` results, preserving upstream order.
pub fn truncate_results<T>(mut items: Vec<T>, cap: usize) -> Vec<T> {
    items.truncate(cap);
    items
}

/// Shape raw upstream items down to `title`, `link`, `snippet`, keeping at most `cap`.
///
/// Non-object entries are skipped; missing `title`/`link` become empty strings.
pub fn shape_search_items(items: &[Value], cap: usize) -> Vec<SearchResultItem> {
    items
        .iter()
        .filter(|item| item.is_object())
        .take(cap)
        .map(|item| SearchResultItem {
            title: string_field(item, "title").unwrap_or_default(),
            link: string_field(item, "link").unwrap_or_default(),
            snippet: string_field(item, "snippet"),
        })
        .collect()
}

fn string_field(item: &Value, field: &str) -> Option<String> {
    item.get(field).and_then(Value::as_str).map(str::to_string)
}
