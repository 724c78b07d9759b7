use crate::{errors::truncate_body, upload::FileSource, Client, Error};

/// Uploads external records for reconciliation against the ledger.
pub struct ReconciliationService<'a> {
    client: &'a Client,
}

impl<'a> ReconciliationService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Uploads a statement file (CSV or JSON) tagged with its `source`, e.g.
    /// the bank or processor it came from. Returns the server's raw answer.
    pub async fn upload_external_data(
        &self,
        source: &str,
        file: FileSource,
    ) -> Result<serde_json::Value, Error> {
        let body = self
            .client
            .upload("reconciliation/upload", "file", file, &[("source", source)])
            .await?;
        serde_json::from_slice(&body).map_err(|e| Error::Decode {
            source: e,
            body: truncate_body(&String::from_utf8_lossy(&body)),
        })
    }
}
