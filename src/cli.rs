use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bex", version, about = "Terminal explorer for the Base network")]
pub struct Cli {
    /// Explorer API base URL (overrides BEX_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a transaction hash or address once and print the result
    Search {
        query: String,
    },
    /// Print the current network status
    Network,
    /// Print the current ETH price
    Price,
    /// Save the explorer API base URL to the config file
    SetApi {
        url: String,
    },
}
