use bex::api::{ApiClient, ApiError, ExplorerApi, NetworkSnapshot};
use bex::app::App;
use bex::cli::{Cli, Commands};
use bex::config::Config;
use bex::search::{Resolution, SearchQuery, Searcher};
use bex::{logging, report, ui};

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tui_input::backend::crossterm::EventHandler;

/// Roughly one Base block
const NETWORK_REFRESH: Duration = Duration::from_secs(12);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());

    match cli.command {
        None => {
            if let Err(e) = logging::init_file(&Config::log_path()?) {
                eprintln!("Logging disabled: {e:#}");
            }
            let api = ApiClient::new(&api_url)?;
            info!(api_url = %api.base_url(), "starting tui");
            run_tui(config, api_url, api).await?;
        }
        Some(Commands::Search { query }) => {
            logging::init_stderr();
            let api = ApiClient::new(&api_url)?;
            let Some(query) = SearchQuery::parse(&query) else {
                bail!("Search query is empty");
            };
            match Searcher::new(api).resolve(&query).await {
                Resolution::Failed(message) => bail!(message),
                resolution => print!("{}", report::render_resolution(&resolution)),
            }
        }
        Some(Commands::Network) => {
            logging::init_stderr();
            let api = ApiClient::new(&api_url)?;
            let info = api
                .get_network()
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            print!("{}", report::render_network(&info));
        }
        Some(Commands::Price) => {
            logging::init_stderr();
            let api = ApiClient::new(&api_url)?;
            let quote = api
                .get_eth_price()
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            print!("{}", report::render_price(&quote));
        }
        Some(Commands::SetApi { url }) => {
            logging::init_stderr();
            let api = ApiClient::new(&url)?;
            config.set_api_url(url)?;
            println!("API URL set to {}", api.base_url());
        }
    }

    Ok(())
}

/// Messages from async tasks back to the main loop
enum AsyncMessage {
    Search {
        generation: u64,
        resolution: Resolution,
    },
    Network(Result<NetworkSnapshot, ApiError>),
}

async fn run_tui(config: Config, api_url: String, api: ApiClient) -> Result<()> {
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            stdout().execute(EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout()))
        },
        restore_terminal,
    )?;

    let mut app = App::new(config, api_url);
    let searcher = Searcher::new(api);

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(10);

    // Fetch network info on startup
    refresh_network(&searcher, tx.clone());

    let result = run_event_loop(&mut terminal, &mut app, &searcher, tx, &mut rx).await;

    restore_terminal()?;

    if let Err(e) = &result {
        error!(error = %e, "tui exited with error");
    }
    result
}

/// Runs `setup` once raw mode is on. If it fails, `restore` puts the terminal back first.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Err(restore_err) = restore() {
                error!(error = %restore_err, "failed to restore terminal");
            }
            Err(e)
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    searcher: &Searcher<ApiClient>,
    tx: mpsc::Sender<AsyncMessage>,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    let mut last_network_refresh = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.is_on_home() && last_network_refresh.elapsed() > NETWORK_REFRESH {
            last_network_refresh = Instant::now();
            refresh_network(searcher, tx.clone());
        }

        // Check for async results
        while let Ok(msg) = rx.try_recv() {
            match msg {
                AsyncMessage::Search {
                    generation,
                    resolution,
                } => {
                    app.complete_search(generation, resolution);
                }
                AsyncMessage::Network(result) => app.set_network_result(result),
            }
        }

        // Poll for input events
        if event::poll(Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global keys
                match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    _ => {}
                }

                if app.should_quit {
                    break;
                }

                // Screen-specific keys
                if app.is_on_home() {
                    match key.code {
                        KeyCode::Enter => {
                            if let Some(ticket) = app.submit_search() {
                                execute_search(
                                    searcher,
                                    ticket.generation,
                                    ticket.query,
                                    tx.clone(),
                                );
                            }
                        }
                        KeyCode::Up => {
                            app.select_history_prev();
                        }
                        KeyCode::Down => {
                            app.select_history_next();
                        }
                        KeyCode::Delete | KeyCode::Backspace
                            if app.selected_history_index.is_some() =>
                        {
                            app.delete_selected_history();
                        }
                        _ => {
                            // Typing always goes to the search bar
                            app.clear_history_selection();
                            app.search_input.handle_event(&ev);
                        }
                    }
                } else if app.is_loading() {
                    if let KeyCode::Char('h') = key.code {
                        app.go_home();
                    }
                } else {
                    match key.code {
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.select_prev();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.select_next();
                        }
                        KeyCode::Enter => {
                            if let Some(link) = app.get_selected_link() {
                                if let Some(ticket) = app.submit(link.target()) {
                                    execute_search(
                                        searcher,
                                        ticket.generation,
                                        ticket.query,
                                        tx.clone(),
                                    );
                                }
                            }
                        }
                        KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('h') => {
                            app.go_home();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn execute_search(
    searcher: &Searcher<ApiClient>,
    generation: u64,
    query: SearchQuery,
    tx: mpsc::Sender<AsyncMessage>,
) {
    let searcher = searcher.clone();
    tokio::spawn(async move {
        let resolution = searcher.resolve(&query).await;
        if tx
            .send(AsyncMessage::Search {
                generation,
                resolution,
            })
            .await
            .is_err()
        {
            warn!(generation, "search finished after the ui closed");
        }
    });
}

fn refresh_network(searcher: &Searcher<ApiClient>, tx: mpsc::Sender<AsyncMessage>) {
    let api = searcher.api().clone();
    tokio::spawn(async move {
        let result = api.get_network().await;
        if tx.send(AsyncMessage::Network(result)).await.is_err() {
            warn!("network refresh finished after the ui closed");
        }
    });
}
