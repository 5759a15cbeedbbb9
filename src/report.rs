//! Plain-text output for the one-shot commands.

use std::fmt::Write;

use crate::api::{NetworkSnapshot, PriceQuote};
use crate::search::Resolution;
use crate::ui::{
    format_block, format_change, format_eth, format_gwei, format_number, format_usd, wei_to_eth,
};

pub fn render_resolution(resolution: &Resolution) -> String {
    let mut out = String::new();

    match resolution {
        Resolution::Transaction(details) => {
            let s = &details.summary;
            let _ = writeln!(out, "Transaction  {}", s.hash);
            let _ = writeln!(out, "  Status     {}", details.status.as_str());
            let _ = writeln!(
                out,
                "  Block      {}",
                format_block(s.block_number, s.timestamp)
            );
            let _ = writeln!(out, "  From       {}", s.from);
            let _ = writeln!(
                out,
                "  To         {}",
                s.to.as_deref().unwrap_or("Contract Creation")
            );
            let _ = writeln!(
                out,
                "  Value      {} ({})",
                format_eth(&s.value_eth),
                format_usd(s.value_usd)
            );
            if let Some(fee) = details.fee_wei().as_deref().and_then(wei_to_eth) {
                let _ = writeln!(out, "  Fee        {}", format_eth(&fee));
            }
            let _ = writeln!(out, "  Gas Price  {}", format_gwei(&s.gas_price_gwei));
            let used = details
                .gas_used
                .map(format_number)
                .unwrap_or_else(|| "pending".to_string());
            let _ = writeln!(out, "  Gas        {used} / {}", format_number(details.gas));
            let _ = writeln!(out, "  Nonce      {}", details.nonce);
        }
        Resolution::Address {
            balance,
            transactions,
        } => {
            let _ = writeln!(out, "Address      {}", balance.address);
            let _ = writeln!(out, "  Network    {}", balance.network);
            let _ = writeln!(out, "  Balance    {}", format_eth(&balance.balance_eth));
            let _ = writeln!(out, "  USD        {}", format_usd(balance.balance_usd));
            let _ = writeln!(out, "  Recent transactions ({}):", transactions.len());
            for tx in transactions {
                let block = tx
                    .block_number
                    .map(|n| format!("#{}", format_number(n)))
                    .unwrap_or_else(|| "pending".to_string());
                let _ = writeln!(
                    out,
                    "    {}  {block}  {}",
                    tx.hash,
                    format_eth(&tx.value_eth)
                );
            }
        }
        Resolution::Failed(message) => {
            let _ = writeln!(out, "Error: {message}");
        }
    }

    out
}

pub fn render_network(info: &NetworkSnapshot) -> String {
    let mut out = String::new();
    match info.chain_id {
        Some(chain_id) => {
            let _ = writeln!(out, "{} (chain {chain_id})", info.network);
        }
        None => {
            let _ = writeln!(out, "{}", info.network);
        }
    }
    let _ = writeln!(
        out,
        "  Connected  {}",
        if info.is_connected { "yes" } else { "no" }
    );
    if let Some(error) = info.connection_error() {
        let _ = writeln!(out, "  Error      {error}");
    }
    if info.block_number.is_some() {
        let _ = writeln!(
            out,
            "  Block      {}",
            format_block(info.block_number, info.block_timestamp)
        );
    }
    if let Some(gwei) = &info.gas_price_gwei {
        let _ = writeln!(out, "  Gas Price  {}", format_gwei(gwei));
    }
    match &info.eth_price {
        Some(quote) => out.push_str(&render_price(quote)),
        None => {
            let _ = writeln!(out, "  ETH        N/A");
        }
    }
    out
}

pub fn render_price(quote: &PriceQuote) -> String {
    format!(
        "  ETH        {} {} (24h vol {})\n",
        format_usd(Some(quote.price_usd)),
        format_change(quote.change_24h),
        format_usd(Some(quote.volume_24h))
    )
}
