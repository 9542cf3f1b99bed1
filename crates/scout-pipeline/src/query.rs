/// A search query. `raw_text` is never empty; `refined_text` is set only when refinement succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw_text: String,
    refined_text: Option<String>,
}

impl Query {
    /// Returns `None` when `raw_text` is blank.
    pub fn new(raw_text: impl Into<String>) -> Option<Self> {
        let raw_text = raw_text.into();
        if raw_text.trim().is_empty() {
            return None;
        }
        Some(Self {
            raw_text,
            refined_text: None,
        })
    }

    pub(crate) fn with_refined(mut self, refined_text: String) -> Self {
        self.refined_text = Some(refined_text);
        self
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn refined_text(&self) -> Option<&str> {
        self.refined_text.as_deref()
    }

    /// Refined text when available, otherwise the raw text.
    pub fn search_text(&self) -> &str {
        self.refined_text.as_deref().unwrap_or(&self.raw_text)
    }
}
