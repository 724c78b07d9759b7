//! Client for the Blnk ledger API.
//!
//! [`Client`] owns the shared request pipeline (build, retry, decode); the
//! services it hands out cover ledgers, balances, transactions, search, and
//! reconciliation uploads.

mod client;
mod errors;
mod logger;
mod query;
mod retry;
mod services;
mod transport;
pub mod types;
mod upload;

pub use self::client::{decode_response, ApiResponse, Client, ClientOptions, API_KEY_HEADER};
pub use self::errors::Error;
pub use self::logger::{Logger, NoopLogger, TracingLogger};
pub use self::query::{add_to_url, to_query_pairs, BalanceQuery, ListQuery, SearchParams};
pub use self::retry::Backoff;
pub use self::services::{
    BalanceService, LedgerService, ReconciliationService, SearchService, TransactionService,
};
pub use self::transport::{
    MultipartForm, OutboundRequest, RequestBody, ReqwestTransport, Transport, TransportResponse,
};
pub use self::upload::{FileSource, DEFAULT_FILE_NAME};

pub use reqwest::Method;
