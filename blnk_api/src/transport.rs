//! The wire boundary: an outbound request description and the trait that sends it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

use crate::Error;

/// A fully built request. Built fresh per call by
/// [`Client::new_request`](crate::Client::new_request); a transport turns it
/// into a new wire request on every send, so retries never share state.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    /// Resolved URL, including the query string for GET payloads.
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

/// Encoded request body.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Serialized JSON document.
    Json(Vec<u8>),
    /// A multipart/form-data body; the transport picks the boundary.
    Multipart(MultipartForm),
}

/// One file part followed by plain text fields.
#[derive(Debug, Clone)]
pub struct MultipartForm {
    pub file_field: String,
    pub file_name: String,
    pub content: Vec<u8>,
    pub fields: Vec<(String, String)>,
}

impl MultipartForm {
    fn into_reqwest(self) -> reqwest::multipart::Form {
        let part = reqwest::multipart::Part::bytes(self.content).file_name(self.file_name);
        let mut form = reqwest::multipart::Form::new().part(self.file_field, part);
        for (key, value) in self.fields {
            form = form.text(key, value);
        }
        form
    }
}

/// Status and raw body of a response that reached us.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations return [`Error::Transport`] for connection-level failures
/// and must not interpret the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &OutboundRequest) -> Result<TransportResponse, Error>;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Config(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<TransportResponse, Error> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        builder = match &request.body {
            None => builder,
            Some(RequestBody::Json(bytes)) => builder.body(bytes.clone()),
            Some(RequestBody::Multipart(form)) => builder.multipart(form.clone().into_reqwest()),
        };

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
