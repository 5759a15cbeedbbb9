use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use crate::api::TransactionSummary;

// ============================================================================
// Helper Functions
// ============================================================================

pub fn truncate_hash(hash: &str) -> String {
    if hash.len() > 20 && hash.is_ascii() {
        format!("{}...{}", &hash[..10], &hash[hash.len() - 6..])
    } else {
        hash.to_string()
    }
}

pub fn format_tx_list_item<'a>(
    index: usize,
    tx: &TransactionSummary,
    owner: &str,
    selected: bool,
) -> ListItem<'a> {
    // Direction relative to the address being viewed
    let (direction, direction_color) = if tx.from.eq_ignore_ascii_case(owner) {
        ("OUT", Color::Magenta)
    } else {
        ("IN ", Color::Green)
    };

    let counterparty = if tx.from.eq_ignore_ascii_case(owner) {
        match &tx.to {
            Some(to) => truncate_hash(to),
            None => "[Contract Create]".to_string(),
        }
    } else {
        truncate_hash(&tx.from)
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{index:>3} "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(truncate_hash(&tx.hash), Style::default().fg(Color::Cyan)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(direction, Style::default().fg(direction_color)),
        Span::styled(" ", Style::default()),
        Span::styled(
            format!("{counterparty:<19}"),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:>16}", format_eth(&tx.value_eth)),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            tx.block_number
                .map(|n| format!("#{}", format_number(n)))
                .unwrap_or_else(|| "pending".to_string()),
            Style::default().fg(Color::White),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            tx.timestamp
                .map(format_timestamp)
                .unwrap_or_else(|| "N/A".to_string()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let style = if selected {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };

    ListItem::new(line).style(style)
}

pub fn format_kv(key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

pub fn format_kv_link(key: &str, value: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED)
    };

    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), style),
    ])
}

pub fn format_timestamp(ts: u64) -> String {
    use std::time::{Duration, UNIX_EPOCH};
    let datetime = UNIX_EPOCH + Duration::from_secs(ts);
    let secs_ago = std::time::SystemTime::now()
        .duration_since(datetime)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    if secs_ago < 60 {
        format!("{secs_ago} secs ago")
    } else if secs_ago < 3600 {
        format!("{} mins ago", secs_ago / 60)
    } else if secs_ago < 86400 {
        format!("{} hours ago", secs_ago / 3600)
    } else {
        format!("{} days ago", secs_ago / 86400)
    }
}

/// Block height with its age, e.g. `#1,234 (5 mins ago)`
pub fn format_block(block: Option<u64>, timestamp: Option<u64>) -> String {
    match block {
        Some(n) => format!(
            "#{} ({})",
            format_number(n),
            timestamp
                .map(format_timestamp)
                .unwrap_or_else(|| "N/A".to_string())
        ),
        None => "pending".to_string(),
    }
}

/// Thousands separators for block heights and gas
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Gas price from the backend's gwei string
pub fn format_gwei(gwei: &str) -> String {
    match gwei.trim().parse::<f64>() {
        Ok(v) if v >= 1.0 => format!("{v:.2} gwei"),
        Ok(v) => format!("{v:.6} gwei"),
        Err(_) => format!("{gwei} gwei"),
    }
}

/// ETH amount from a decimal string, fixed at 6 places without going through f64.
///
/// Accepts exponent form (`1E-18`, `1.5E+3`) as produced by Python's `Decimal`.
pub fn format_eth(eth: &str) -> String {
    let eth = eth.trim();
    let Some(plain) = expand_exponent(eth) else {
        return format!("{eth} ETH");
    };
    let (whole, frac) = plain.split_once('.').unwrap_or((&plain, ""));
    let frac: String = frac.chars().chain(std::iter::repeat('0')).take(6).collect();
    format!("{whole}.{frac} ETH")
}

/// Rewrite a non-negative decimal, possibly in exponent form, as plain `whole.frac`
fn expand_exponent(value: &str) -> Option<String> {
    let (mantissa, exp) = match value.find(['e', 'E']) {
        Some(i) => (&value[..i], value[i + 1..].parse::<i64>().ok()?),
        None => (value, 0),
    };
    if exp.abs() > 100 {
        return None;
    }

    let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{whole}{frac}");
    let point = whole.len() as i64 + exp;

    let (int_part, frac_part) = if point <= 0 {
        (String::new(), format!("{}{digits}", "0".repeat(point.unsigned_abs() as usize)))
    } else if point as usize >= digits.len() {
        (format!("{digits}{}", "0".repeat(point as usize - digits.len())), String::new())
    } else {
        let (i, f) = digits.split_at(point as usize);
        (i.to_string(), f.to_string())
    };

    let int_part = int_part.trim_start_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    Some(format!("{int_part}.{frac_part}"))
}

/// Convert a wei decimal string to an ETH decimal string
pub fn wei_to_eth(wei: &str) -> Option<String> {
    let wei = wei.trim();
    if wei.is_empty() || !wei.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let padded = format!("{wei:0>19}");
    let (whole, frac) = padded.split_at(padded.len() - 18);
    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        Some(whole.to_string())
    } else {
        Some(format!("{whole}.{frac}"))
    }
}

/// Dollar amount with thousands separators; "N/A" when no price was available
pub fn format_usd(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let cents = (v.abs() * 100.0).round() as u64;
            let sign = if v < 0.0 { "-" } else { "" };
            format!("{sign}${}.{:02}", format_number(cents / 100), cents % 100)
        }
        _ => "N/A".to_string(),
    }
}

pub fn format_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{pct:.2}%")
    } else {
        format!("{pct:.2}%")
    }
}

pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let popup_layout = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(area);

    popup_layout[1]
}

pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Length(height),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical[1]);

    horizontal[1]
}

pub fn padded_rect(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y + padding,
        width: area.width.saturating_sub(padding * 2),
        height: area.height.saturating_sub(padding * 2),
    }
}
