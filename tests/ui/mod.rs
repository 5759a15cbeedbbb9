//! UI rendering tests for bex
//!
//! These tests ensure the UI renders correctly by checking the drawn buffer.

pub mod address_tests;
pub mod common_tests;
pub mod home_tests;

use bex::api::{
    AddressBalance, NetworkSnapshot, PriceQuote, TransactionDetails, TransactionSummary, TxStatus,
};
use bex::app::{AddressView, App, NetworkPanel, SearchOutcome, TxView};
use bex::config::Config;
use bex::ui::draw;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

pub const OWNER: &str = "0x1111111111111111111111111111111111111111";
pub const RECIPIENT: &str = "0x2222222222222222222222222222222222222222";
pub const TX_HASH: &str = "0xaaaa111122223333444455556666777788889999aaaabbbbccccddddeeeeffff";

// ==================== Test Data Builders ====================

pub fn mock_config() -> Config {
    Config {
        api_url: None,
        recent_searches: vec![
            OWNER.to_string(),
            TX_HASH.to_string(),
            "0xdeadbeef".to_string(),
        ],
        path: None,
    }
}

pub fn mock_config_empty() -> Config {
    Config::default()
}

pub fn mock_snapshot() -> NetworkSnapshot {
    NetworkSnapshot {
        network: "Base Mainnet".to_string(),
        chain_id: Some(8453),
        block_number: Some(19000000),
        block_timestamp: Some(1700000000),
        gas_price_wei: Some("5000000".to_string()),
        gas_price_gwei: Some("0.005".to_string()),
        is_connected: true,
        error: None,
        eth_price: Some(PriceQuote {
            price_usd: 3250.5,
            change_24h: -1.5,
            volume_24h: 12_000_000.0,
        }),
    }
}

pub fn mock_summary(hash: &str, from: &str, to: Option<&str>, value_eth: &str) -> TransactionSummary {
    TransactionSummary {
        hash: hash.to_string(),
        from: from.to_string(),
        to: to.map(str::to_string),
        value_eth: value_eth.to_string(),
        value_usd: Some(4875.75),
        block_number: Some(19000000),
        timestamp: Some(1700000000),
        gas_price_gwei: "50".to_string(),
    }
}

pub fn mock_disconnected_snapshot() -> NetworkSnapshot {
    NetworkSnapshot {
        network: "Base Mainnet".to_string(),
        chain_id: None,
        block_number: None,
        block_timestamp: None,
        gas_price_wei: None,
        gas_price_gwei: None,
        is_connected: false,
        error: Some("HTTPConnectionPool: connection refused".to_string()),
        eth_price: None,
    }
}

/// Transaction details as `GET /api/transaction` sends them: no timestamp
pub fn mock_tx_details() -> TransactionDetails {
    let mut summary = mock_summary(TX_HASH, OWNER, Some(RECIPIENT), "1.5");
    summary.timestamp = None;
    TransactionDetails {
        summary,
        value_wei: "1500000000000000000".to_string(),
        gas: 100000,
        gas_price_wei: "50000000000".to_string(),
        nonce: 42,
        status: TxStatus::Success,
        gas_used: Some(65000),
    }
}

pub fn mock_balance() -> AddressBalance {
    AddressBalance {
        address: OWNER.to_string(),
        balance_wei: "5500000000000000000".to_string(),
        balance_eth: "5.5".to_string(),
        balance_usd: Some(17877.75),
        network: "Base Mainnet".to_string(),
    }
}

pub fn mock_summaries() -> Vec<TransactionSummary> {
    vec![
        mock_summary(
            "0xbbbb111122223333444455556666777788889999aaaabbbbccccddddeeeeffff",
            OWNER,
            Some(RECIPIENT),
            "1",
        ),
        mock_summary(
            "0xcccc111122223333444455556666777788889999aaaabbbbccccddddeeeeffff",
            "0x3333333333333333333333333333333333333333",
            Some(OWNER),
            "0.25",
        ),
        mock_summary(
            "0xdddd111122223333444455556666777788889999aaaabbbbccccddddeeeeffff",
            OWNER,
            None,
            "0",
        ),
    ]
}

pub fn tx_outcome() -> SearchOutcome {
    SearchOutcome::TransactionResult(TxView {
        details: mock_tx_details(),
        selected_link: 0,
    })
}

pub fn address_outcome(transactions: Vec<TransactionSummary>) -> SearchOutcome {
    SearchOutcome::AddressResult(AddressView {
        balance: mock_balance(),
        transactions,
        selected_index: 0,
    })
}

pub fn create_test_app(outcome: SearchOutcome, with_network: bool) -> App {
    let mut app = App::new(mock_config(), "http://localhost:8000".to_string());
    app.outcome = outcome;
    if with_network {
        app.network = NetworkPanel::Ready(mock_snapshot());
    }
    app
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        content.push_str(&buffer_line(buffer, y));
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
