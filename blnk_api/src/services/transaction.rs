use reqwest::Method;

use crate::{
    client::NO_PAYLOAD,
    types::{CreateTransactionRequest, InflightStatus, Transaction, UpdateInflightRequest},
    Client, Error,
};

/// Calls under `transactions`.
pub struct TransactionService<'a> {
    client: &'a Client,
}

impl<'a> TransactionService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Records a transaction. It is queued and applied asynchronously by the ledger.
    pub async fn create(&self, request: &CreateTransactionRequest) -> Result<Transaction, Error> {
        self.client
            .call("transactions", Method::POST, Some(request))
            .await
    }

    pub async fn get(&self, transaction_id: &str) -> Result<Transaction, Error> {
        self.client
            .call(
                &format!("transactions/{}", transaction_id),
                Method::GET,
                NO_PAYLOAD,
            )
            .await
    }

    /// Commits or voids an inflight transaction. `amount` commits part of it.
    pub async fn update_inflight(
        &self,
        transaction_id: &str,
        status: InflightStatus,
        amount: Option<f64>,
    ) -> Result<Transaction, Error> {
        let body = UpdateInflightRequest { status, amount };
        self.client
            .call(
                &format!("transactions/inflight/{}", transaction_id),
                Method::PUT,
                Some(&body),
            )
            .await
    }

    /// Creates the reversing transaction for `transaction_id`.
    pub async fn refund(&self, transaction_id: &str) -> Result<Transaction, Error> {
        self.client
            .call(
                &format!("refund-transaction/{}", transaction_id),
                Method::POST,
                NO_PAYLOAD,
            )
            .await
    }
}
