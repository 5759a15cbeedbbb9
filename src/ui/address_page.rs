use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::AddressView;
use crate::ui::{NAV_HELP, NAV_HELP_NO_LIST};

pub fn draw_address_result(frame: &mut Frame, view: &AddressView) {
    let area = frame.area();
    let balance = &view.balance;
    let padded = padded_rect(area, 1);

    let chunks = Layout::vertical([
        Constraint::Length(8),                                  // Balance
        Constraint::Length(view.transactions.len() as u16 + 3), // Recent transactions
        Constraint::Min(0),                                     // Padding
        Constraint::Length(1),                                  // Nav help
    ])
    .split(padded);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" 👤 Address ");

    let lines = vec![
        format_kv("Address", &balance.address),
        format_kv("Network", &balance.network),
        Line::from(""),
        Line::from(vec![
            Span::styled("ETH Balance: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_eth(&balance.balance_eth),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("USD Value: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_usd(balance.balance_usd),
                Style::default().fg(Color::Green),
            ),
        ]),
        format_kv("Wei", &balance.balance_wei),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let tx_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Recent Transactions ({}) ", view.transactions.len()));

    let items: Vec<ListItem> = if view.transactions.is_empty() {
        vec![ListItem::new(" No recent transactions").style(Style::default().fg(Color::DarkGray))]
    } else {
        view.transactions
            .iter()
            .enumerate()
            .map(|(i, tx)| {
                format_tx_list_item(i + 1, tx, &balance.address, i == view.selected_index)
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(tx_block), chunks[1]);

    let nav_help = if view.transactions.is_empty() {
        NAV_HELP_NO_LIST
    } else {
        NAV_HELP
    };

    let help = Paragraph::new(nav_help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}
