//! Query payloads for list and fetch endpoints.

use serde::Serialize;

/// Pagination for list endpoints such as `GET ledgers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

impl ListQuery {
    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Options for `GET balances/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BalanceQuery {
    /// Include queued (not yet applied) transactions in the returned amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_queued: Option<bool>,
}
