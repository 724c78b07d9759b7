//! Error types for the API client.

use crate::types::ResourceType;

/// Errors that can occur when building, sending, or decoding API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was configured with invalid options (empty base URL, zero retries).
    #[error("Invalid client configuration: {0}")]
    Config(String),
    /// Caller input was rejected before any request was built.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// The endpoint could not be resolved against the base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// The request payload could not be encoded as query parameters or JSON.
    #[error("Failed to encode request: {0}")]
    Encoding(String),
    /// Connection-level failure (refused, reset, timeout).
    #[error("Transport error: {0}")]
    Transport(String),
    /// The server answered with a 5xx status.
    #[error("Server error with status {status}")]
    Server { status: u16, body: String },
    /// The server answered with a non-success status that is not retried.
    #[error("Request failed with status {status}: {body}")]
    Api { status: u16, body: String },
    /// A success response carried a body that is not the expected JSON.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// Every attempt failed with a transient error.
    #[error("Max retry count exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: usize, last_error: String },
    /// The search resource tag is not one of the known resource types.
    #[error("Unsupported search resource: {0}")]
    UnsupportedResource(String),
    /// A single search hit could not be resolved into its resource type.
    #[error("Failed to decode search hit {index} as {resource}: {source}")]
    DocumentDecode {
        index: usize,
        resource: ResourceType,
        #[source]
        source: serde_json::Error,
    },
    /// A multipart upload was answered with a non-success status.
    #[error("Upload failed with status {status}: {body}")]
    Upload { status: u16, body: String },
    /// Reading the upload source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the retry executor should try the request again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Server { .. })
    }

    /// HTTP status attached to the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } | Error::Api { status, .. } | Error::Upload { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Transport(format!("request timed out: {}", e))
        } else {
            Error::Transport(e.to_string())
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
