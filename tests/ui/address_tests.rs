//! Address screen UI tests

use super::*;

#[test]
fn test_address_screen_shows_balance() {
    let app = create_test_app(address_outcome(mock_summaries()), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, &format!("Address: {OWNER}")));
    assert!(buffer_contains(&buffer, "Network: Base Mainnet"));
    assert!(buffer_contains(&buffer, "ETH Balance: 5.500000 ETH"));
    assert!(buffer_contains(&buffer, "USD Value: $17,877.75"));
    assert!(buffer_contains(&buffer, "Wei: 5500000000000000000"));
}

#[test]
fn test_address_screen_usd_unavailable() {
    let mut app = create_test_app(address_outcome(vec![]), true);
    if let bex::app::SearchOutcome::AddressResult(view) = &mut app.outcome {
        view.balance.balance_usd = None;
    }
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "USD Value: N/A"));
}

#[test]
fn test_address_screen_lists_transactions() {
    let app = create_test_app(address_outcome(mock_summaries()), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Recent Transactions (3)"));
    assert!(buffer_contains(&buffer, "0xbbbb1111...eeffff"));
    assert!(buffer_contains(&buffer, "0xcccc1111...eeffff"));
    assert!(buffer_contains(&buffer, "1.000000 ETH"));
}

#[test]
fn test_address_screen_shows_direction() {
    let app = create_test_app(address_outcome(mock_summaries()), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "OUT 0x22222222...222222"));
    assert!(buffer_contains(&buffer, "IN  0x33333333...333333"));
    assert!(buffer_contains(&buffer, "[Contract Create]"));
}

#[test]
fn test_address_screen_no_transactions() {
    let app = create_test_app(address_outcome(vec![]), true);
    let buffer = render_to_buffer(&app, 120, 40);

    assert!(buffer_contains(&buffer, "Recent Transactions (0)"));
    assert!(buffer_contains(&buffer, "No recent transactions"));
    assert!(!buffer_contains(&buffer, "Enter open"));
}
