//! Parameters for `POST search/{resource}`.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Search request body. Unset optional fields are omitted from the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Query text. Must be non-empty; `*` matches everything.
    pub q: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

impl SearchParams {
    pub fn new(q: &str) -> Self {
        Self {
            q: q.to_string(),
            ..Self::default()
        }
    }

    /// Comma-separated fields the query text is matched against.
    pub fn with_query_by(mut self, query_by: &str) -> Self {
        self.query_by = Some(query_by.to_string());
        self
    }

    /// Filter expression, e.g. `name:World` or `balance:>1`.
    pub fn with_filter_by(mut self, filter_by: &str) -> Self {
        self.filter_by = Some(filter_by.to_string());
        self
    }

    /// Sort expression, e.g. `created_at:desc`.
    pub fn with_sort_by(mut self, sort_by: &str) -> Self {
        self.sort_by = Some(sort_by.to_string());
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Rejects parameters the server would refuse anyway.
    pub fn validate(&self) -> Result<(), Error> {
        if self.q.is_empty() {
            return Err(Error::Validation("search query is required".to_string()));
        }
        Ok(())
    }
}
