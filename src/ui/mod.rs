mod address_page;
mod helper;
mod tx_page;

use address_page::draw_address_result;
use helper::*;
use tx_page::draw_tx_result;

pub use helper::{
    format_block, format_change, format_eth, format_gwei, format_number, format_timestamp,
    format_usd, wei_to_eth,
};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::api::NetworkSnapshot;
use crate::app::{App, NetworkPanel, SearchOutcome};

const TITLE_ART: &str = r#"
██████╗ ███████╗██╗  ██╗
██╔══██╗██╔════╝╚██╗██╔╝
██████╔╝█████╗   ╚███╔╝
██╔══██╗██╔══╝   ██╔██╗
██████╔╝███████╗██╔╝ ██╗
╚═════╝ ╚══════╝╚═╝  ╚═╝
"#;

const NAV_HELP: &str = "↑↓ navigate • Enter open • h home • Esc quit";
const NAV_HELP_NO_LIST: &str = "h home • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    match &app.outcome {
        SearchOutcome::Idle => draw_home(frame, app),
        SearchOutcome::Loading(msg) => draw_loading(frame, msg),
        SearchOutcome::TransactionResult(view) => draw_tx_result(frame, view),
        SearchOutcome::AddressResult(view) => draw_address_result(frame, view),
        SearchOutcome::Failed(msg) => draw_error(frame, msg),
    }
}

fn draw_home(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let recent_searches = app.get_recent_searches();
    let has_history = !recent_searches.is_empty();

    // Calculate history section height (max 5 items + 2 for border)
    let history_height = if has_history {
        (recent_searches.len().min(5) + 2) as u16
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(8),              // Title
        Constraint::Length(1),              // Subtitle
        Constraint::Length(2),              // Spacing
        Constraint::Length(3),              // Search bar
        Constraint::Length(1),              // Spacing
        Constraint::Length(history_height), // History
        Constraint::Length(1),              // Spacing
        Constraint::Length(1),              // API status
        Constraint::Length(1),              // Help
        Constraint::Min(0),                 // Network info
    ])
    .split(area);

    let title = Paragraph::new(TITLE_ART)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("Base Explorer")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    let search_area = centered_rect(60, chunks[3]);
    let search_selected = app.selected_history_index.is_none();
    draw_search_bar(frame, app, search_area, search_selected);

    if has_history {
        let history_area = centered_rect(60, chunks[5]);
        draw_history_list(frame, app, history_area);
    }

    let api_display = if app.api_url.chars().count() > 50 {
        let head: String = app.api_url.chars().take(47).collect();
        format!("{head}...")
    } else {
        app.api_url.clone()
    };
    let api_status = Line::from(vec![
        Span::styled("API: ", Style::default().fg(Color::DarkGray)),
        Span::styled(api_display, Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(
        Paragraph::new(api_status).alignment(Alignment::Center),
        chunks[7],
    );

    let help_text = if has_history {
        "Enter search • ↑↓ history • Del remove • Esc quit"
    } else {
        "Enter to search • Esc to quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[8]);

    draw_network_panel(frame, &app.network, chunks[9]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect, selected: bool) {
    let border_color = if selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 🔍 Search ")
        .title_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled(
            "0x... (address or transaction hash)",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));

    frame.render_widget(input, area);

    // Only show cursor if search bar is selected
    if selected {
        let cursor_x =
            area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
        let cursor_y = area.y + 1;

        if cursor_x < area.x + area.width.saturating_sub(1) {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn draw_history_list(frame: &mut Frame, app: &App, area: Rect) {
    let recent_searches = app.get_recent_searches();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Recent Searches ");

    let items: Vec<ListItem> = recent_searches
        .iter()
        .enumerate()
        .take(5)
        .map(|(i, query)| {
            let is_selected = app.selected_history_index == Some(i);
            let style = if is_selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };

            // Truncate long queries
            let display = if query.chars().count() > 60 {
                let head: String = query.chars().take(57).collect();
                format!("{head}...")
            } else {
                query.clone()
            };

            ListItem::new(format!(" {display}")).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn draw_network_panel(frame: &mut Frame, panel: &NetworkPanel, area: Rect) {
    let net_block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Network Status ");

    let lines = match panel {
        NetworkPanel::Loading => vec![Line::from("Loading network info...").fg(Color::DarkGray)],
        NetworkPanel::Unavailable(msg) => vec![Line::from(msg.clone()).fg(Color::Red)],
        NetworkPanel::Ready(info) => network_lines(info),
    };

    let net_para = Paragraph::new(lines)
        .block(net_block)
        .alignment(Alignment::Center);
    frame.render_widget(net_para, area);
}

fn network_lines(info: &NetworkSnapshot) -> Vec<Line<'static>> {
    let (conn_label, conn_color) = if info.is_connected {
        ("● connected", Color::Green)
    } else {
        ("● disconnected", Color::Red)
    };

    let mut header = vec![Span::styled(
        info.network.clone(),
        Style::default().fg(Color::Cyan).bold(),
    )];
    if let Some(chain_id) = info.chain_id {
        header.push(Span::styled(
            format!(" (chain {chain_id})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    header.push(Span::raw(" "));
    header.push(Span::styled(conn_label, Style::default().fg(conn_color)));

    let mut lines = vec![Line::from(header)];

    if let Some(error) = info.connection_error() {
        lines.push(Line::from(error.to_string()).fg(Color::Red));
    }

    let mut chain_line = Vec::new();
    if let Some(block) = info.block_number {
        chain_line.push(Span::styled("Block: ", Style::default().fg(Color::DarkGray)));
        chain_line.push(Span::styled(
            format!("#{}", format_number(block)),
            Style::default().fg(Color::White),
        ));
    }
    if let Some(gwei) = &info.gas_price_gwei {
        if !chain_line.is_empty() {
            chain_line.push(Span::raw("  "));
        }
        chain_line.push(Span::styled("Gas: ", Style::default().fg(Color::DarkGray)));
        chain_line.push(Span::styled(
            format_gwei(gwei),
            Style::default().fg(Color::White),
        ));
    }
    if !chain_line.is_empty() {
        lines.push(Line::from(chain_line));
    }

    let mut price_line = vec![Span::styled("ETH: ", Style::default().fg(Color::DarkGray))];
    match &info.eth_price {
        Some(quote) => {
            let change_color = if quote.change_24h >= 0.0 {
                Color::Green
            } else {
                Color::Red
            };
            price_line.push(Span::styled(
                format_usd(Some(quote.price_usd)),
                Style::default().fg(Color::White),
            ));
            price_line.push(Span::raw(" "));
            price_line.push(Span::styled(
                format_change(quote.change_24h),
                Style::default().fg(change_color),
            ));
            price_line.push(Span::styled(
                format!("  24h vol {}", format_usd(Some(quote.volume_24h))),
                Style::default().fg(Color::DarkGray),
            ));
        }
        None => price_line.push(Span::styled("N/A", Style::default().fg(Color::DarkGray))),
    }
    lines.push(Line::from(price_line));

    lines
}

fn draw_loading(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Loading ");

    let spinner_frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let idx = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| (d.as_millis() / 100) as usize)
        .unwrap_or(0)
        % spinner_frames.len();

    let text = format!("{} {}", spinner_frames[idx], msg);
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));

    let centered = centered_rect_fixed(60, 5, area);
    frame.render_widget(paragraph, centered);
}

fn draw_error(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let padded = padded_rect(area, 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" ❌ Error ");

    let mut lines: Vec<Line> = msg
        .lines()
        .map(|line| Line::from(line.to_string()).fg(Color::Red))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(NAV_HELP_NO_LIST).fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: false });

    frame.render_widget(paragraph, padded);
}
