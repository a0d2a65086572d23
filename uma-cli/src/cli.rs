//! CLI argument parsing using clap

use clap::{Parser, Subcommand};

/// Query the unofficial Marvel Contest of Champions API
#[derive(Parser, Debug)]
#[command(name = "uma", about = "Query the unofficial MCOC API", version)]
pub struct Args {
    /// API root to query instead of the public one
    #[arg(long, env = "UMA_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (no timeout if omitted)
    #[arg(long, env = "UMA_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Print the record as pretty JSON
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub json: bool,

    /// Quiet mode - only output the record's name
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Resource to fetch
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch a champion's stats at a tier and rank
    Champ {
        /// Champion name, e.g. "Ghost"
        name: String,

        /// Star tier
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
        tier: u8,

        /// Rank within the tier
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rank: u8,
    },
    /// Fetch a war map node
    Node {
        /// Node id
        id: u32,
    },
    /// Fetch a war tier
    War {
        /// War tier
        tier: u32,
    },
}
