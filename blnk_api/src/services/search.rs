use reqwest::Method;

use crate::{
    query::SearchParams,
    types::{ResourceType, SearchResponse},
    Client, Error,
};

/// Full-text search over ledgers, balances, and transactions.
pub struct SearchService<'a> {
    client: &'a Client,
}

impl<'a> SearchService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Searches `resource` and resolves every hit into its typed [`Document`](crate::types::Document).
    ///
    /// An empty `params.q` fails with [`Error::Validation`] before any request
    /// is built or sent.
    pub async fn search_document(
        &self,
        params: &SearchParams,
        resource: ResourceType,
    ) -> Result<SearchResponse, Error> {
        params.validate()?;

        let endpoint = format!("search/{}", resource);
        let request = self
            .client
            .new_request(&endpoint, Method::POST, Some(params))?;
        let mut resp: SearchResponse = self.client.execute(&request).await?.data;

        resp.resolve(resource)?;
        tracing::info!(
            "search/{} matched {} of {} documents",
            resource,
            resp.found,
            resp.out_of
        );
        Ok(resp)
    }
}
