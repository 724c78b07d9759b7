//! Ledger resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, MetaData};

/// A ledger groups balances, e.g. one ledger per product or customer type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub ledger_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub created_at: DateTime<Utc>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub meta_data: MetaData,
}

/// Body of `POST ledgers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateLedgerRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl CreateLedgerRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            meta_data: None,
        }
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.meta_data
            .get_or_insert_with(MetaData::new)
            .insert(key.to_string(), value.into());
        self
    }
}
