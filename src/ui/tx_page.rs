use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::TxStatus;
use crate::app::TxView;
use crate::ui::NAV_HELP;

pub fn draw_tx_result(frame: &mut Frame, view: &TxView) {
    let area = frame.area();
    let details = &view.details;
    let summary = &details.summary;

    let chunks = Layout::vertical([
        Constraint::Min(16),   // Tx info
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let border_color = match details.status {
        TxStatus::Success => Color::Green,
        TxStatus::Failure => Color::Red,
        TxStatus::Pending => Color::Yellow,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" 📄 Transaction ({}) ", details.status.as_str()));

    let mut link_idx = 0;

    let mut lines = vec![
        format_kv("Hash", &summary.hash),
        format_kv(
            "Block",
            &format_block(summary.block_number, summary.timestamp),
        ),
        Line::from(""),
    ];

    // From (link 0)
    lines.push(format_kv_link(
        "From",
        &summary.from,
        view.selected_link == link_idx,
    ));
    link_idx += 1;

    // To (link 1) or contract creation
    match &summary.to {
        Some(to) => lines.push(format_kv_link("To", to, view.selected_link == link_idx)),
        None => lines.push(format_kv("To", "Contract Creation")),
    }

    lines.push(Line::from(""));
    lines.push(format_kv(
        "Value",
        &format!(
            "{} ({})",
            format_eth(&summary.value_eth),
            format_usd(summary.value_usd)
        ),
    ));

    if let Some(fee_eth) = details.fee_wei().as_deref().and_then(wei_to_eth) {
        lines.push(format_kv("Fee Paid", &format_eth(&fee_eth)));
    }

    lines.push(format_kv("Gas Price", &format_gwei(&summary.gas_price_gwei)));

    let gas_used = match details.gas_used {
        Some(used) if details.gas > 0 => format!(
            "{} / {} ({:.2}%)",
            format_number(used),
            format_number(details.gas),
            (used as f64 / details.gas as f64) * 100.0
        ),
        Some(used) => format!("{} / {}", format_number(used), format_number(details.gas)),
        None => format!("pending / {}", format_number(details.gas)),
    };
    lines.push(format_kv("Gas Used / Limit", &gas_used));

    lines.push(Line::from(""));
    lines.push(format_kv("Nonce", &details.nonce.to_string()));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(NAV_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}
