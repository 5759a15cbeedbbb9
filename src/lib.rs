//! bex - Base Explorer
//!
//! A terminal explorer for the Base network, backed by an explorer HTTP API.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
pub mod search;
pub mod ui;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, ExplorerApi};
pub use app::{AddressView, App, NavLink, NetworkPanel, SearchOutcome, SearchTicket, TxView};
pub use config::Config;
pub use search::{Resolution, SearchQuery, Searcher};
