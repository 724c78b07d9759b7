use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

mod ledger;
pub use self::ledger::{CreateLedgerRequest, Ledger};

mod balance;
pub use self::balance::{CreateBalanceRequest, LedgerBalance};

mod transaction;
pub use self::transaction::{
    CreateTransactionRequest, Distribution, InflightStatus, Transaction, UpdateInflightRequest,
};

mod search;
pub use self::search::{Document, Resource, ResourceType, SearchHit, SearchResponse};

/// Free-form metadata attached to every resource.
pub type MetaData = HashMap<String, serde_json::Value>;

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
