use thiserror::Error;

const JQL_CONJUNCTION: &str = " AND ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JqlError {
    #[error("at least one of summary, assignee, or status is required")]
    NoFilters,
}

/// Optional issue filters. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub summary: Option<String>,
    pub assignee: Option<String>,
    pub status: Option<String>,
}

impl FilterSet {
    pub fn new(
        summary: Option<String>,
        assignee: Option<String>,
        status: Option<String>,
    ) -> Self {
        Self {
            summary,
            assignee,
            status,
        }
    }

    /// Present filters as `(field, operator, value)` in emission order: summary, assignee, status.
    fn clauses(&self) -> Vec<(&'static str, &'static str, &str)> {
        [
            ("summary", "~", self.summary.as_deref()),
            ("assignee", "=", self.assignee.as_deref()),
            ("status", "=", self.status.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, operator, value)| {
            let value = value.map(str::trim).filter(|value| !value.is_empty())?;
            Some((field, operator, value))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses().is_empty()
    }
}

/// Render a filter set as JQL, e.g. `summary ~ "login" AND status = "Open"`.
///
/// Values are inserted between double quotes as-is. Embedded quotes are not
/// escaped, so callers can widen the query through a crafted value.
pub fn build_jql(filters: &FilterSet) -> Result<String, JqlError> {
    let clauses = filters.clauses();
    if clauses.is_empty() {
        return Err(JqlError::NoFilters);
    }
    Ok(clauses
        .into_iter()
        .map(|(field, operator, value)| format!("{field} {operator} \"{value}\""))
        .collect::<Vec<_>>()
        .join(JQL_CONJUNCTION))
}
