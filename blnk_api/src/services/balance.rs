use reqwest::Method;

use crate::{
    query::BalanceQuery,
    types::{CreateBalanceRequest, LedgerBalance},
    Client, Error,
};

/// Calls under `balances`.
pub struct BalanceService<'a> {
    client: &'a Client,
}

impl<'a> BalanceService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &CreateBalanceRequest) -> Result<LedgerBalance, Error> {
        self.client.call("balances", Method::POST, Some(request)).await
    }

    pub async fn get(&self, balance_id: &str, query: &BalanceQuery) -> Result<LedgerBalance, Error> {
        self.client
            .call(&format!("balances/{}", balance_id), Method::GET, Some(query))
            .await
    }
}
