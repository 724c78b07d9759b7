use reqwest::Method;

use crate::{
    client::NO_PAYLOAD,
    query::ListQuery,
    types::{CreateLedgerRequest, Ledger},
    Client, Error,
};

/// Calls under `ledgers`.
pub struct LedgerService<'a> {
    client: &'a Client,
}

impl<'a> LedgerService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &CreateLedgerRequest) -> Result<Ledger, Error> {
        self.client.call("ledgers", Method::POST, Some(request)).await
    }

    pub async fn get(&self, ledger_id: &str) -> Result<Ledger, Error> {
        self.client
            .call(&format!("ledgers/{}", ledger_id), Method::GET, NO_PAYLOAD)
            .await
    }

    /// Lists ledgers, one page at a time.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Ledger>, Error> {
        self.client.call("ledgers", Method::GET, Some(query)).await
    }
}
