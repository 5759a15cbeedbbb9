//! Common UI tests - error, loading, layout, and navigation

use super::*;
use bex::app::SearchOutcome;

// ==================== Error Screen Tests ====================

#[test]
fn test_error_screen_shows_message() {
    let outcome = SearchOutcome::Failed("Invalid address or transaction hash".to_string());
    let app = create_test_app(outcome, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Error"));
    assert!(buffer_contains(&buffer, "Invalid address or transaction hash"));
    assert!(buffer_contains(&buffer, "h home"));
}

#[test]
fn test_error_screen_generic_message() {
    let outcome = SearchOutcome::Failed(bex::api::GENERIC_FAILURE.to_string());
    let app = create_test_app(outcome, true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Failed to fetch data. Please check the input."));
}

// ==================== Loading Screen Tests ====================

#[test]
fn test_loading_screen_shows_message() {
    let outcome = SearchOutcome::Loading("Searching 0x1234...".to_string());
    let app = create_test_app(outcome, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Loading"));
    assert!(buffer_contains(&buffer, "Searching 0x1234..."));
}

#[test]
fn test_submit_shows_loading_screen() {
    let mut app = create_test_app(SearchOutcome::Idle, true);
    app.submit(TX_HASH).unwrap();
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Searching 0xaaaa111122...eeeeffff"));
}

// ==================== Navigation Help Tests ====================

#[test]
fn test_screens_show_navigation_help() {
    let outcomes = vec![
        SearchOutcome::Idle,
        tx_outcome(),
        address_outcome(mock_summaries()),
        SearchOutcome::Failed("boom".to_string()),
    ];

    for outcome in outcomes {
        let app = create_test_app(outcome, true);
        let buffer = render_to_buffer(&app, 120, 40);

        assert!(buffer_contains(&buffer, "Esc"));
    }
}

// ==================== Layout Tests ====================

#[test]
fn test_small_terminal_renders_without_panic() {
    let outcomes = vec![
        SearchOutcome::Idle,
        tx_outcome(),
        address_outcome(mock_summaries()),
        address_outcome(vec![]),
        SearchOutcome::Failed("Error".to_string()),
        SearchOutcome::Loading("Loading...".to_string()),
    ];

    for outcome in outcomes {
        let app = create_test_app(outcome, true);
        // This should not panic even with very small dimensions
        let _ = render_to_buffer(&app, 40, 10);
    }
}

#[test]
fn test_large_terminal_renders_without_panic() {
    let app = create_test_app(SearchOutcome::Idle, true);
    let _ = render_to_buffer(&app, 200, 100);
}
