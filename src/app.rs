use crate::api::{AddressBalance, ApiError, NetworkSnapshot, TransactionDetails, TransactionSummary};
use crate::config::Config;
use crate::search::{Resolution, SearchQuery};
use tracing::{debug, warn};
use tui_input::Input;

/// What the search area currently shows. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Idle,
    Loading(String),
    TransactionResult(TxView),
    AddressResult(AddressView),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TxView {
    pub details: TransactionDetails,
    pub selected_link: usize, // 0 = from, 1 = to
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddressView {
    pub balance: AddressBalance,
    pub transactions: Vec<TransactionSummary>,
    pub selected_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NetworkPanel {
    Loading,
    Ready(NetworkSnapshot),
    Unavailable(String),
}

/// Navigable links from a result page
#[derive(Debug, Clone, PartialEq)]
pub enum NavLink {
    Address(String),
    Transaction(String),
}

impl NavLink {
    pub fn target(&self) -> &str {
        match self {
            NavLink::Address(s) | NavLink::Transaction(s) => s,
        }
    }
}

/// Handed out by `App::submit`; the result of the search must come back with the same generation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: SearchQuery,
}

pub struct App {
    pub config: Config,
    pub api_url: String,
    pub outcome: SearchOutcome,
    pub network: NetworkPanel,
    pub search_input: Input,
    pub selected_history_index: Option<usize>,
    pub should_quit: bool,
    generation: u64,
}

impl App {
    pub fn new(config: Config, api_url: String) -> Self {
        Self {
            config,
            api_url,
            outcome: SearchOutcome::Idle,
            network: NetworkPanel::Loading,
            search_input: Input::default(),
            selected_history_index: None,
            should_quit: false,
            generation: 0,
        }
    }

    /// Latest issued search generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a search. Empty input is ignored and leaves the outcome as it was.
    ///
    /// The previous result is dropped immediately, so nothing stale is shown
    /// while the new search is in flight.
    pub fn submit(&mut self, raw: &str) -> Option<SearchTicket> {
        let query = SearchQuery::parse(raw)?;

        self.generation += 1;
        self.selected_history_index = None;
        if let Err(e) = self.config.add_recent_search(query.as_str().to_string()) {
            warn!(error = %e, "could not save search history");
        }
        self.outcome = SearchOutcome::Loading(query.description());

        Some(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Submit whatever is in the search bar, or the selected history entry
    pub fn submit_search(&mut self) -> Option<SearchTicket> {
        if let Some(query) = self.get_selected_history_query() {
            return self.submit(&query);
        }

        let value = self.search_input.value().to_string();
        let ticket = self.submit(&value)?;
        self.search_input.reset();
        Some(ticket)
    }

    /// Apply a finished search. Results from superseded searches are dropped.
    pub fn complete_search(&mut self, generation: u64, resolution: Resolution) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "dropping stale search result");
            return false;
        }

        self.outcome = match resolution {
            Resolution::Transaction(details) => SearchOutcome::TransactionResult(TxView {
                details,
                selected_link: 0,
            }),
            Resolution::Address {
                balance,
                transactions,
            } => SearchOutcome::AddressResult(AddressView {
                balance,
                transactions,
                selected_index: 0,
            }),
            Resolution::Failed(message) => SearchOutcome::Failed(message),
        };
        true
    }

    /// Back to the search screen. Any search still in flight is discarded when it lands.
    pub fn go_home(&mut self) {
        self.generation += 1;
        self.outcome = SearchOutcome::Idle;
    }

    /// Replace the network snapshot on success; keep the last good one on failure.
    ///
    /// A disconnected snapshot is still a successful response and replaces the panel.
    pub fn set_network_result(&mut self, result: Result<NetworkSnapshot, ApiError>) {
        match result {
            Ok(snapshot) => {
                if let Some(error) = snapshot.connection_error() {
                    warn!(network = %snapshot.network, error, "backend reports node disconnected");
                }
                self.network = NetworkPanel::Ready(snapshot);
            }
            Err(e) => {
                debug!(error = %e, "network refresh failed");
                if !matches!(self.network, NetworkPanel::Ready(_)) {
                    self.network = NetworkPanel::Unavailable(
                        e.detail()
                            .unwrap_or("Failed to fetch network info")
                            .to_string(),
                    );
                }
            }
        }
    }

    pub fn get_recent_searches(&self) -> &[String] {
        &self.config.recent_searches
    }

    pub fn select_history_prev(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(0) => None, // Wrap to search input
            Some(i) => Some(i - 1),
        };
    }

    pub fn select_history_next(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(i) if i >= len - 1 => None, // Wrap to search input
            Some(i) => Some(i + 1),
        };
    }

    pub fn get_selected_history_query(&self) -> Option<String> {
        self.selected_history_index
            .and_then(|i| self.config.recent_searches.get(i).cloned())
    }

    pub fn clear_history_selection(&mut self) {
        self.selected_history_index = None;
    }

    pub fn delete_selected_history(&mut self) {
        if let Some(idx) = self.selected_history_index {
            if let Err(e) = self.config.remove_recent_search(idx) {
                warn!(error = %e, "could not save search history");
            }

            // Adjust selection
            let len = self.config.recent_searches.len();
            if len == 0 {
                self.selected_history_index = None;
            } else if idx >= len {
                self.selected_history_index = Some(len - 1);
            }
        }
    }

    pub fn is_on_home(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Loading(_))
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        match &mut self.outcome {
            SearchOutcome::TransactionResult(view) => {
                let max = tx_link_count(&view.details);
                view.selected_link = if view.selected_link > 0 {
                    view.selected_link - 1
                } else {
                    max - 1
                };
            }
            SearchOutcome::AddressResult(view) => {
                let len = view.transactions.len();
                if len > 0 {
                    view.selected_index = (view.selected_index + len - 1) % len;
                }
            }
            _ => {}
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        match &mut self.outcome {
            SearchOutcome::TransactionResult(view) => {
                let max = tx_link_count(&view.details);
                view.selected_link = (view.selected_link + 1) % max;
            }
            SearchOutcome::AddressResult(view) => {
                let len = view.transactions.len();
                if len > 0 {
                    view.selected_index = (view.selected_index + 1) % len;
                }
            }
            _ => {}
        }
    }

    /// Get the currently selected navigation link
    pub fn get_selected_link(&self) -> Option<NavLink> {
        match &self.outcome {
            SearchOutcome::TransactionResult(view) => {
                let summary = &view.details.summary;
                let mut links = vec![NavLink::Address(summary.from.clone())];
                if let Some(to) = &summary.to {
                    links.push(NavLink::Address(to.clone()));
                }
                links.get(view.selected_link).cloned()
            }
            SearchOutcome::AddressResult(view) => view
                .transactions
                .get(view.selected_index)
                .map(|tx| NavLink::Transaction(tx.hash.clone())),
            _ => None,
        }
    }
}

/// from, plus to unless the transaction created a contract
fn tx_link_count(details: &TransactionDetails) -> usize {
    if details.summary.to.is_some() {
        2
    } else {
        1
    }
}
