//! Home screen UI tests

use super::*;
use bex::app::{App, NetworkPanel, SearchOutcome};

#[test]
fn test_home_screen_shows_title() {
    let app = create_test_app(SearchOutcome::Idle, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "████"));
    assert!(buffer_contains(&buffer, "Base Explorer"));
}

#[test]
fn test_home_screen_shows_search_placeholder() {
    let app = create_test_app(SearchOutcome::Idle, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Search"));
    assert!(buffer_contains(&buffer, "0x... (address or transaction hash)"));
}

#[test]
fn test_home_screen_shows_typed_query() {
    let mut app = create_test_app(SearchOutcome::Idle, true);
    app.search_input = tui_input::Input::new("0xabc123".to_string());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "0xabc123"));
    assert!(!buffer_contains(&buffer, "address or transaction hash"));
}

#[test]
fn test_home_screen_shows_network_snapshot() {
    let app = create_test_app(SearchOutcome::Idle, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Network Status"));
    assert!(buffer_contains(&buffer, "Base Mainnet"));
    assert!(buffer_contains(&buffer, "chain 8453"));
    assert!(buffer_contains(&buffer, "#19,000,000"));
    assert!(buffer_contains(&buffer, "0.005000 gwei"));
    assert!(buffer_contains(&buffer, "$3,250.50"));
    assert!(buffer_contains(&buffer, "-1.50%"));
}

#[test]
fn test_home_screen_price_unavailable() {
    let mut app = create_test_app(SearchOutcome::Idle, false);
    let mut snapshot = mock_snapshot();
    snapshot.eth_price = None;
    app.network = NetworkPanel::Ready(snapshot);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "ETH: N/A"));
}

#[test]
fn test_home_screen_network_loading() {
    let app = create_test_app(SearchOutcome::Idle, false);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Loading network info..."));
}

#[test]
fn test_home_screen_network_unavailable() {
    let mut app = create_test_app(SearchOutcome::Idle, false);
    app.network = NetworkPanel::Unavailable("Failed to fetch network info".to_string());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Failed to fetch network info"));
}

#[test]
fn test_home_screen_shows_recent_searches() {
    let app = create_test_app(SearchOutcome::Idle, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Recent Searches"));
    assert!(buffer_contains(&buffer, OWNER));
    assert!(buffer_contains(&buffer, "0xdeadbeef"));
    assert!(buffer_contains(&buffer, "↑↓ history"));
}

#[test]
fn test_home_screen_without_history() {
    let app = App::new(mock_config_empty(), "http://localhost:8000".to_string());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(!buffer_contains(&buffer, "Recent Searches"));
    assert!(buffer_contains(&buffer, "Enter to search"));
}

#[test]
fn test_home_screen_shows_api_url() {
    let app = create_test_app(SearchOutcome::Idle, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "API: http://localhost:8000"));
}

#[test]
fn test_home_screen_node_disconnected() {
    let mut app = create_test_app(SearchOutcome::Idle, false);
    app.network = NetworkPanel::Ready(mock_disconnected_snapshot());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Base Mainnet ● disconnected"));
    assert!(buffer_contains(&buffer, "connection refused"));
    assert!(!buffer_contains(&buffer, "chain 8453"));
    assert!(!buffer_contains(&buffer, "Block: #"));
    assert!(buffer_contains(&buffer, "ETH: N/A"));
}
