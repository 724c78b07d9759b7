//! Search results and the resolution of raw hits into typed resources.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Ledger, LedgerBalance, MetaData, Transaction};
use crate::Error;

/// The searchable collections. Selects both the `search/{resource}` path
/// segment and the type each hit resolves into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Ledgers,
    Balances,
    Transactions,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [
        ResourceType::Ledgers,
        ResourceType::Balances,
        ResourceType::Transactions,
    ];

    /// Path segment used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Ledgers => "ledgers",
            ResourceType::Balances => "balances",
            ResourceType::Transactions => "transactions",
        }
    }

    /// Deserializes a raw hit document into this resource's concrete type.
    pub fn resolve(self, raw: &Value) -> Result<Document, serde_json::Error> {
        match self {
            ResourceType::Ledgers => Ledger::deserialize(raw).map(Document::Ledger),
            ResourceType::Balances => LedgerBalance::deserialize(raw).map(Document::Balance),
            ResourceType::Transactions => Transaction::deserialize(raw).map(Document::Transaction),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ledgers" => Ok(ResourceType::Ledgers),
            "balances" => Ok(ResourceType::Balances),
            "transactions" => Ok(ResourceType::Transactions),
            other => Err(Error::UnsupportedResource(other.to_string())),
        }
    }
}

/// Fields every searchable resource carries.
pub trait Resource {
    fn created_at(&self) -> DateTime<Utc>;
    fn meta_data(&self) -> &MetaData;
}

impl Resource for Ledger {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn meta_data(&self) -> &MetaData {
        &self.meta_data
    }
}

impl Resource for LedgerBalance {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn meta_data(&self) -> &MetaData {
        &self.meta_data
    }
}

impl Resource for Transaction {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn meta_data(&self) -> &MetaData {
        &self.meta_data
    }
}

/// A resolved search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Ledger(Ledger),
    Balance(LedgerBalance),
    Transaction(Transaction),
}

impl Document {
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Document::Ledger(_) => ResourceType::Ledgers,
            Document::Balance(_) => ResourceType::Balances,
            Document::Transaction(_) => ResourceType::Transactions,
        }
    }

    pub fn as_ledger(&self) -> Option<&Ledger> {
        match self {
            Document::Ledger(ledger) => Some(ledger),
            _ => None,
        }
    }

    pub fn as_balance(&self) -> Option<&LedgerBalance> {
        match self {
            Document::Balance(balance) => Some(balance),
            _ => None,
        }
    }

    pub fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            Document::Transaction(txn) => Some(txn),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Resource {
        match self {
            Document::Ledger(ledger) => ledger,
            Document::Balance(balance) => balance,
            Document::Transaction(txn) => txn,
        }
    }
}

impl Resource for Document {
    fn created_at(&self) -> DateTime<Utc> {
        self.inner().created_at()
    }

    fn meta_data(&self) -> &MetaData {
        self.inner().meta_data()
    }
}

/// One entry of [`SearchResponse::hits`].
///
/// Holds the raw JSON document as returned by the server; after
/// [`SearchResponse::resolve`] it also holds the typed [`Document`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "document", default)]
    raw: Value,

    #[serde(skip)]
    resolved: Option<Document>,
}

impl SearchHit {
    pub fn from_raw(raw: Value) -> Self {
        Self {
            raw,
            resolved: None,
        }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The typed document, or `None` if the hit has not been resolved.
    pub fn document(&self) -> Option<&Document> {
        self.resolved.as_ref()
    }

    pub fn into_document(self) -> Option<Document> {
        self.resolved
    }
}

/// Body of a `search/{resource}` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Number of documents matching the query.
    pub found: i64,
    /// Number of documents in the collection.
    pub out_of: i64,
    pub page: i64,
    pub search_time_ms: i64,
    pub hits: Vec<SearchHit>,
}

impl SearchResponse {
    /// Resolves every hit as `resource`.
    ///
    /// All-or-nothing: if any hit fails to decode, no hit is updated and the
    /// error names the index of the first failing hit.
    pub fn resolve(&mut self, resource: ResourceType) -> Result<(), Error> {
        let documents = self
            .hits
            .iter()
            .enumerate()
            .map(|(index, hit)| {
                resource
                    .resolve(&hit.raw)
                    .map_err(|source| Error::DocumentDecode {
                        index,
                        resource,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (hit, document) in self.hits.iter_mut().zip(documents) {
            hit.resolved = Some(document);
        }
        Ok(())
    }

    /// Like [`resolve`](Self::resolve), but takes the resource tag as text.
    /// Unknown tags leave every hit unresolved.
    pub fn resolve_as(&mut self, tag: &str) -> Result<(), Error> {
        let resource = tag.parse::<ResourceType>()?;
        self.resolve(resource)
    }

    /// Resolved documents, in hit order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.hits.iter().filter_map(SearchHit::document)
    }

    /// Number of pages for the whole collection at `per_page` results each.
    pub fn total_pages(&self, per_page: i64) -> i64 {
        if per_page <= 0 {
            return 0;
        }
        (self.out_of + per_page - 1) / per_page
    }
}
