//! Transaction resource and the payloads that create or settle one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, MetaData};

/// A movement of funds between balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_transaction: String,

    #[serde(default)]
    pub amount: f64,

    /// `amount * precision`, as stored by the ledger.
    #[serde(default)]
    pub precise_amount: i64,

    #[serde(default)]
    pub precision: f64,

    #[serde(default)]
    pub rate: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub reference: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// e.g. `QUEUED`, `APPLIED`, `INFLIGHT`, `VOID`, `REJECTED`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hash: String,

    #[serde(default)]
    pub allow_overdraft: bool,

    #[serde(default)]
    pub inflight: bool,

    #[serde(default)]
    pub atomic: bool,

    #[serde(default)]
    pub skip_queue: bool,

    #[serde(default)]
    pub sources: Option<Vec<Distribution>>,

    #[serde(default)]
    pub destinations: Option<Vec<Distribution>>,

    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,

    #[serde(default)]
    pub inflight_expiry_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub effective_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_at: DateTime<Utc>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub meta_data: MetaData,
}

/// One leg of a split transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Balance ID or indicator.
    pub identifier: String,
    /// Share of the amount: a percentage (`"20%"`), a fixed amount, or `"left"`.
    pub distribution: String,
}

/// Body of `POST transactions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTransactionRequest {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<i64>,
    pub reference: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Distribution>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<Distribution>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_overdraft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

/// Outcome applied to an inflight transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InflightStatus {
    Commit,
    Void,
}

/// Body of `PUT transactions/inflight/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateInflightRequest {
    pub status: InflightStatus,
    /// Partial commit amount; omitted to commit or void the full amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}
