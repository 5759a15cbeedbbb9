mod helper;
mod types;

use helper::*;

pub use types::*;

use reqwest::{header::ACCEPT, Client, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Upper bound for a single backend call; chain lookups on the backend can be slow
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Shown when a failure carries no backend `detail`
pub const GENERIC_FAILURE: &str = "Failed to fetch data. Please check the input.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The backend's `detail` field, when the error response carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Message suitable for the error banner
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or(GENERIC_FAILURE).to_string()
    }
}

/// Read-only view of the explorer backend.
///
/// `ApiClient` is the HTTP implementation; the search pipeline is generic
/// over this trait so it can be driven by in-memory fakes.
pub trait ExplorerApi: Send + Sync {
    fn get_network(&self) -> impl Future<Output = Result<NetworkSnapshot, ApiError>> + Send;

    fn get_address_balance(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<AddressBalance, ApiError>> + Send;

    fn get_address_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> impl Future<Output = Result<AddressTransactions, ApiError>> + Send;

    fn get_transaction(
        &self,
        hash: &str,
    ) -> impl Future<Output = Result<TransactionDetails, ApiError>> + Send;

    fn get_eth_price(&self) -> impl Future<Output = Result<PriceQuote, ApiError>> + Send;
}

/// HTTP client for the explorer backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");

        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = extract_detail(&body);
            debug!(%url, status = status.as_u16(), ?detail, "backend error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            debug!(%url, error = %e, "undecodable body");
            ApiError::Decode(e.to_string())
        })
    }
}

impl ExplorerApi for ApiClient {
    async fn get_network(&self) -> Result<NetworkSnapshot, ApiError> {
        let url = join_segments(&self.base_url, &["api", "network"])?;
        self.get_json(url).await
    }

    async fn get_address_balance(&self, address: &str) -> Result<AddressBalance, ApiError> {
        let url = join_segments(&self.base_url, &["api", "address", address])?;
        self.get_json(url).await
    }

    async fn get_address_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<AddressTransactions, ApiError> {
        let mut url = join_segments(&self.base_url, &["api", "address", address, "transactions"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        self.get_json(url).await
    }

    async fn get_transaction(&self, hash: &str) -> Result<TransactionDetails, ApiError> {
        let url = join_segments(&self.base_url, &["api", "transaction", hash])?;
        self.get_json(url).await
    }

    async fn get_eth_price(&self) -> Result<PriceQuote, ApiError> {
        let url = join_segments(&self.base_url, &["api", "price", "eth"])?;
        self.get_json(url).await
    }
}
