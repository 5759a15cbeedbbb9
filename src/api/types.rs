use serde::{Deserialize, Serialize};

// ============================================================================
// Data Types
// ============================================================================

/// Network status as reported by `GET /api/network`
///
/// When the node is unreachable the backend only sends `network`,
/// `is_connected: false` and `error`, so the chain fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub network: String,
    #[serde(default)]
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub block_timestamp: Option<u64>,
    #[serde(default)]
    pub gas_price_wei: Option<String>,
    #[serde(default)]
    pub gas_price_gwei: Option<String>,
    pub is_connected: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub eth_price: Option<PriceQuote>,
}

impl NetworkSnapshot {
    /// Why the node is unreachable, `None` while connected
    pub fn connection_error(&self) -> Option<&str> {
        if self.is_connected {
            None
        } else {
            Some(self.error.as_deref().unwrap_or("Node unreachable"))
        }
    }
}

/// ETH/USD quote, also served standalone by `GET /api/price/eth`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price_usd: f64,
    pub change_24h: f64,
    pub volume_24h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressBalance {
    pub address: String,
    pub balance_wei: String,
    pub balance_eth: String,
    /// `None` when the price feed was unavailable
    #[serde(default)]
    pub balance_usd: Option<f64>,
    pub network: String,
}

/// Lightweight transaction row for the address view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub hash: String,
    pub from: String,
    /// `None` for contract creation
    #[serde(default)]
    pub to: Option<String>,
    pub value_eth: String,
    #[serde(default)]
    pub value_usd: Option<f64>,
    /// `None` while the transaction is pending
    #[serde(default)]
    pub block_number: Option<u64>,
    /// Only the address listing sends a timestamp; `GET /api/transaction` does not
    #[serde(default)]
    pub timestamp: Option<u64>,
    pub gas_price_gwei: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetails {
    #[serde(flatten)]
    pub summary: TransactionSummary,
    pub value_wei: String,
    /// Gas limit
    pub gas: u64,
    pub gas_price_wei: String,
    pub nonce: u64,
    #[serde(default)]
    pub status: TxStatus,
    #[serde(default)]
    pub gas_used: Option<u64>,
}

impl TransactionDetails {
    /// Fee paid in wei (`gas_used * gas_price_wei`), once the receipt is known
    pub fn fee_wei(&self) -> Option<String> {
        let used = u128::from(self.gas_used?);
        let price: u128 = self.gas_price_wei.trim().parse().ok()?;
        used.checked_mul(price).map(|fee| fee.to_string())
    }
}

/// Execution status carried as `1`, `0` or `null` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<i64>", into = "Option<i64>")]
pub enum TxStatus {
    Success,
    Failure,
    #[default]
    Pending,
}

impl TxStatus {
    pub fn from_code(code: Option<i64>) -> Option<Self> {
        match code {
            Some(1) => Some(TxStatus::Success),
            Some(0) => Some(TxStatus::Failure),
            None => Some(TxStatus::Pending),
            Some(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Success => "✓ Success",
            TxStatus::Failure => "✗ Failed",
            TxStatus::Pending => "Pending",
        }
    }
}

impl TryFrom<Option<i64>> for TxStatus {
    type Error = String;

    fn try_from(code: Option<i64>) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown transaction status {code:?}"))
    }
}

impl From<TxStatus> for Option<i64> {
    fn from(status: TxStatus) -> Self {
        match status {
            TxStatus::Success => Some(1),
            TxStatus::Failure => Some(0),
            TxStatus::Pending => None,
        }
    }
}

/// Page returned by `GET /api/address/{address}/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressTransactions {
    pub address: String,
    pub count: usize,
    pub transactions: Vec<TransactionSummary>,
}
