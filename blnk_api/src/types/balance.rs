//! Ledger balance resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, MetaData};

/// Running totals of a single account inside a ledger.
///
/// Amounts are in minor units (`balance / currency_multiplier` gives the
/// major-unit value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerBalance {
    pub balance_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ledger_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub identity_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,

    #[serde(default)]
    pub balance: i64,

    #[serde(default)]
    pub credit_balance: i64,

    #[serde(default)]
    pub debit_balance: i64,

    #[serde(default)]
    pub inflight_balance: i64,

    #[serde(default)]
    pub inflight_credit_balance: i64,

    #[serde(default)]
    pub inflight_debit_balance: i64,

    #[serde(default)]
    pub currency_multiplier: f64,

    #[serde(default)]
    pub version: i64,

    /// Optional external identifier (e.g. `@WorldUSD`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub indicator: String,

    #[serde(default)]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub inflight_expires_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub meta_data: MetaData,
}

impl LedgerBalance {
    /// Balance in major units, or `None` when no multiplier is recorded.
    pub fn major_units(&self) -> Option<f64> {
        if self.currency_multiplier > 0.0 {
            Some(self.balance as f64 / self.currency_multiplier)
        } else {
            None
        }
    }
}

/// Body of `POST balances`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBalanceRequest {
    pub ledger_id: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}
