//! Search resolution: one ambiguous input, classified by the backend.
//!
//! Stage 1 probes the input as a transaction hash. A miss is not an error;
//! it moves the pipeline to stage 2, which fetches the input as an address
//! (balance and a page of recent transactions, concurrently).

use std::future::Future;

use tracing::{debug, info, warn};

use crate::api::{AddressBalance, ApiError, ExplorerApi, TransactionDetails, TransactionSummary};

/// Number of recent transactions fetched alongside an address balance
pub const ADDRESS_TX_LIMIT: usize = 5;

/// A trimmed, non-empty search string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns `None` for empty or whitespace-only input.
    ///
    /// No hex or length validation happens here: whether the input is a
    /// transaction or an address is decided by the backend.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a human-readable description for the loading screen
    pub fn description(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() > 24 {
            let head: String = chars[..12].iter().collect();
            let tail: String = chars[chars.len() - 8..].iter().collect();
            format!("Searching {head}...{tail}")
        } else {
            format!("Searching {}...", self.0)
        }
    }
}

/// Outcome of the transaction probe
#[derive(Debug)]
pub enum Probe {
    Hit(TransactionDetails),
    /// The input is not a known transaction. Carries the probe failure for logging only.
    Miss(ApiError),
}

/// Final result of a search
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Transaction(TransactionDetails),
    Address {
        balance: AddressBalance,
        transactions: Vec<TransactionSummary>,
    },
    Failed(String),
}

/// Stage 1: try the input as a transaction hash
pub async fn probe_transaction<A: ExplorerApi>(api: &A, query: &SearchQuery) -> Probe {
    match api.get_transaction(query.as_str()).await {
        Ok(details) => Probe::Hit(details),
        Err(err) => Probe::Miss(err),
    }
}

/// Stage 2: fetch the input as an address.
///
/// Both calls run concurrently; the first failure fails the stage.
pub async fn fetch_address<A: ExplorerApi>(
    api: &A,
    query: &SearchQuery,
) -> Result<(AddressBalance, Vec<TransactionSummary>), ApiError> {
    let (balance, page) = join_fail_fast(
        api.get_address_balance(query.as_str()),
        api.get_address_transactions(query.as_str(), ADDRESS_TX_LIMIT),
    )
    .await?;

    let mut transactions = page.transactions;
    transactions.truncate(ADDRESS_TX_LIMIT);

    Ok((balance, transactions))
}

/// Await two fallible futures concurrently.
///
/// Returns both values if both succeed. Returns the first error as soon as
/// either future fails, dropping the other without waiting for it.
pub async fn join_fail_fast<L, R, E, FL, FR>(left: FL, right: FR) -> Result<(L, R), E>
where
    FL: Future<Output = Result<L, E>>,
    FR: Future<Output = Result<R, E>>,
{
    tokio::pin!(left);
    tokio::pin!(right);

    tokio::select! {
        l = &mut left => {
            let l = l?;
            let r = right.await?;
            Ok((l, r))
        }
        r = &mut right => {
            let r = r?;
            let l = left.await?;
            Ok((l, r))
        }
    }
}

/// Runs the two-stage search against a backend. Holds no state between searches.
#[derive(Debug, Clone)]
pub struct Searcher<A> {
    api: A,
}

impl<A: ExplorerApi> Searcher<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn resolve(&self, query: &SearchQuery) -> Resolution {
        info!(query = query.as_str(), "search");

        match probe_transaction(&self.api, query).await {
            Probe::Hit(details) => return Resolution::Transaction(details),
            Probe::Miss(err) if err.is_not_found() => {
                debug!(query = query.as_str(), "no such transaction, trying address");
            }
            Probe::Miss(err) => {
                debug!(query = query.as_str(), error = %err, "transaction lookup failed, trying address");
            }
        }

        match fetch_address(&self.api, query).await {
            Ok((balance, transactions)) => Resolution::Address {
                balance,
                transactions,
            },
            Err(err) => {
                warn!(query = query.as_str(), error = %err, "address lookup failed");
                Resolution::Failed(err.user_message())
            }
        }
    }
}
