//! HTTP client for the Blnk ledger API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    errors::truncate_body,
    logger::{Logger, TracingLogger},
    query::{add_to_url, to_query_pairs},
    retry::Backoff,
    services::{
        BalanceService, LedgerService, ReconciliationService, SearchService, TransactionService,
    },
    transport::{OutboundRequest, ReqwestTransport, RequestBody, Transport, TransportResponse},
    Error,
};

/// Header carrying the API key (`X-Blnk-Key`).
pub const API_KEY_HEADER: &str = "x-blnk-key";

/// Payload placeholder for requests that carry none.
pub(crate) const NO_PAYLOAD: Option<&()> = None;

/// Retry, timeout, and logging settings.
#[derive(Clone)]
pub struct ClientOptions {
    /// Total attempts per request, including the first. Must be at least 1.
    pub retry_count: usize,
    pub backoff: Backoff,
    /// Upper bound for every network call.
    pub timeout: Duration,
    pub logger: Arc<dyn Logger>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            retry_count: 3,
            backoff: Backoff::default(),
            timeout: Duration::from_secs(10),
            logger: Arc::new(TracingLogger),
        }
    }
}

impl ClientOptions {
    pub fn with_retry_count(mut self, retry_count: usize) -> Self {
        self.retry_count = retry_count;
        self
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    fn validate(&self) -> Result<(), Error> {
        if self.retry_count == 0 {
            return Err(Error::Config("retry count must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// A decoded success response.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

/// HTTP client for the Blnk ledger API.
///
/// Every call goes through the same pipeline: [`new_request`](Self::new_request)
/// builds the request, [`execute`](Self::execute) sends it with retries on
/// transient failures and decodes the body. Resource-specific calls live on
/// the services returned by [`ledgers`](Self::ledgers),
/// [`balances`](Self::balances), and friends.
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    api_key: Option<String>,
    options: ClientOptions,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client with default options.
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, Error> {
        Self::with_options(base_url, api_key, ClientOptions::default())
    }

    /// Creates a client backed by `reqwest` with the given options.
    pub fn with_options(
        base_url: &str,
        api_key: Option<String>,
        options: ClientOptions,
    ) -> Result<Self, Error> {
        options.validate()?;
        let transport = ReqwestTransport::new(options.timeout)?;
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            api_key,
            options,
            transport: Arc::new(transport),
        })
    }

    /// Replaces the transport, e.g. with a test double.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Points the client at another server.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), Error> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn ledgers(&self) -> LedgerService<'_> {
        LedgerService::new(self)
    }

    pub fn balances(&self) -> BalanceService<'_> {
        BalanceService::new(self)
    }

    pub fn transactions(&self) -> TransactionService<'_> {
        TransactionService::new(self)
    }

    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(self)
    }

    pub fn reconciliation(&self) -> ReconciliationService<'_> {
        ReconciliationService::new(self)
    }

    /// Resolves `endpoint` (relative, e.g. `ledgers/ldg_1`) against the base URL.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url, Error> {
        let endpoint = endpoint.trim_start_matches('/');
        Url::parse(format!("{}{}", self.base_url, endpoint).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Url(e)
        })
    }

    /// Headers shared by JSON and upload requests.
    pub(crate) fn auth_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &self.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|_| Error::Encoding("API key is not a valid header value".to_string()))?;
            headers.insert(API_KEY_HEADER, value);
        }
        Ok(headers)
    }

    /// Builds a request for `endpoint`.
    ///
    /// GET payloads are encoded as query parameters (unset fields omitted);
    /// any other method sends the payload as a JSON body.
    pub fn new_request<P>(
        &self,
        endpoint: &str,
        method: Method,
        payload: Option<&P>,
    ) -> Result<OutboundRequest, Error>
    where
        P: Serialize + ?Sized,
    {
        let mut url = self.endpoint_url(endpoint)?;
        let mut headers = self.auth_headers()?;
        let mut body = None;

        if method == Method::GET {
            if let Some(payload) = payload {
                url = add_to_url(&url, &to_query_pairs(payload)?);
            }
        } else {
            if let Some(payload) = payload {
                let bytes =
                    serde_json::to_vec(payload).map_err(|e| Error::Encoding(e.to_string()))?;
                body = Some(RequestBody::Json(bytes));
            }
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(OutboundRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Sends `request`, retrying transport failures and 5xx responses.
    ///
    /// Runs at most `retry_count` attempts with the configured backoff between
    /// them. The first response below 500 is decoded and returned; a non-2xx
    /// status or an undecodable body is returned as an error without retrying.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &OutboundRequest,
    ) -> Result<ApiResponse<T>, Error> {
        let attempts = self.options.retry_count;
        let logger = &self.options.logger;
        let mut last_error: Option<Error> = None;

        for attempt in 1..=attempts {
            match self.transport.send(request).await {
                Err(err) if err.is_retryable() => {
                    logger.info(&format!(
                        "{} {} failed (attempt {}/{}): {}",
                        request.method, request.url, attempt, attempts, err
                    ));
                    last_error = Some(err);
                }
                Err(err) => {
                    logger.error(&err.to_string());
                    return Err(err);
                }
                Ok(resp) if resp.status >= 500 => {
                    let body = truncate_body(&resp.text());
                    logger.error(&format!(
                        "Request failed with status code {} (attempt {}/{}): {}",
                        resp.status, attempt, attempts, body
                    ));
                    last_error = Some(Error::Server {
                        status: resp.status,
                        body,
                    });
                }
                Ok(resp) => {
                    return match decode_response(&resp) {
                        Ok(data) => Ok(ApiResponse {
                            status: resp.status,
                            data,
                        }),
                        Err(err) => {
                            logger.error(&err.to_string());
                            Err(err)
                        }
                    };
                }
            }

            if attempt < attempts {
                tokio::time::sleep(self.options.backoff.delay_for_attempt(attempt)).await;
            }
        }

        Err(Error::MaxRetriesExceeded {
            attempts,
            last_error: last_error.map(|e| e.to_string()).unwrap_or_default(),
        })
    }

    /// Builds, executes, and unwraps a JSON call in one step.
    pub(crate) async fn call<P, T>(
        &self,
        endpoint: &str,
        method: Method,
        payload: Option<&P>,
    ) -> Result<T, Error>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.new_request(endpoint, method, payload)?;
        Ok(self.execute(&request).await?.data)
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub(crate) fn logger(&self) -> &dyn Logger {
        self.options.logger.as_ref()
    }
}

/// Translates a response into `T`.
///
/// Any status outside 2xx becomes [`Error::Api`] with the (truncated) body;
/// a 2xx body that is not valid JSON for `T` becomes [`Error::Decode`].
pub fn decode_response<T: DeserializeOwned>(resp: &TransportResponse) -> Result<T, Error> {
    if !resp.is_success() {
        let body = truncate_body(&resp.text());
        tracing::error!("Request failed with status {}: {}", resp.status, body);
        return Err(Error::Api {
            status: resp.status,
            body,
        });
    }

    serde_json::from_slice::<T>(&resp.body).map_err(|source| {
        let body = truncate_body(&resp.text());
        tracing::error!("Failed to parse response: {} | body: {}", source, body);
        Error::Decode { source, body }
    })
}

fn normalize_base_url(base_url: &str) -> Result<Url, Error> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(Error::Config("base url is required".to_string()));
    }
    let mut url = Url::parse(trimmed)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SearchParams;

    fn client(api_key: Option<&str>) -> Client {
        Client::new("http://localhost:5001", api_key.map(str::to_string)).unwrap()
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        assert_eq!(client(None).base_url().as_str(), "http://localhost:5001/");
        let c = Client::new("http://localhost:5001/api/v1", None).unwrap();
        assert_eq!(c.base_url().as_str(), "http://localhost:5001/api/v1/");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(matches!(Client::new("  ", None), Err(Error::Config(_))));
    }

    #[test]
    fn unparsable_base_url_is_a_url_error() {
        assert!(matches!(Client::new("not a url", None), Err(Error::Url(_))));
    }

    #[test]
    fn zero_retry_count_is_rejected() {
        let options = ClientOptions::default().with_retry_count(0);
        assert!(matches!(
            Client::with_options("http://localhost:5001", None, options),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.retry_count, 3);
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.backoff, Backoff::Fixed(Duration::from_secs(2)));
    }

    #[test]
    fn set_base_url_normalizes() {
        let mut c = client(None);
        c.set_base_url("https://ledger.example.com/v2").unwrap();
        assert_eq!(c.base_url().as_str(), "https://ledger.example.com/v2/");
    }

    #[test]
    fn get_payload_becomes_query_string() {
        let query = crate::query::ListQuery::default().with_page(2);
        let req = client(None)
            .new_request("ledgers", Method::GET, Some(&query))
            .unwrap();
        assert_eq!(req.url.as_str(), "http://localhost:5001/ledgers?page=2");
        assert!(req.body.is_none());
        assert!(req.headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn post_payload_becomes_json_body() {
        let params = SearchParams::new("*").with_filter_by("name:World");
        let req = client(Some("secret"))
            .new_request("search/ledgers", Method::POST, Some(&params))
            .unwrap();
        assert_eq!(req.url.as_str(), "http://localhost:5001/search/ledgers");
        assert_eq!(req.headers[CONTENT_TYPE], "application/json");
        assert_eq!(req.headers[API_KEY_HEADER], "secret");
        match req.body {
            Some(RequestBody::Json(bytes)) => {
                let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
                assert_eq!(json, serde_json::json!({"q": "*", "filter_by": "name:World"}));
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[test]
    fn no_api_key_means_no_auth_header() {
        let req = client(None)
            .new_request("ledgers/ldg_1", Method::GET, NO_PAYLOAD)
            .unwrap();
        assert!(req.headers.get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn leading_slash_on_endpoint_is_tolerated() {
        let req = client(None)
            .new_request("/balances/bln_1", Method::GET, NO_PAYLOAD)
            .unwrap();
        assert_eq!(req.url.as_str(), "http://localhost:5001/balances/bln_1");
    }

    #[test]
    fn decode_translates_client_errors() {
        let resp = TransportResponse::new(404, "ledger not found");
        let err = decode_response::<serde_json::Value>(&resp).unwrap_err();
        assert!(matches!(err, Error::Api { status: 404, ref body } if body == "ledger not found"));
    }

    #[test]
    fn decode_reports_malformed_json_separately() {
        let resp = TransportResponse::new(200, "{not valid json}");
        let err = decode_response::<serde_json::Value>(&resp).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
