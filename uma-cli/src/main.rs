//! UMA CLI - Command-line interface for the unofficial MCOC API

mod cli;
mod config;
mod error;
mod output;

use clap::Parser;
use cli::{Args, Command};
use config::Config;
use output::{Fetched, OutputFormatter};
use tracing_subscriber::EnvFilter;
use uma_http_client::UmaClient;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_logging(config.log_level);

    // The client runs on this runtime only; nothing relies on an ambient one
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let client = config.build_client()?;
    let fetched = runtime.block_on(fetch(&client, &config.command));
    client.close();

    OutputFormatter::new(config.output).print(&fetched?)
}

/// Run the request named by `command`
async fn fetch(client: &UmaClient, command: &Command) -> Result<Fetched, error::CliError> {
    tracing::debug!(?command, base_url = client.base_url(), "fetching");

    let fetched = match command {
        Command::Champ { name, tier, rank } => {
            Fetched::Champion(client.get_champion(name, *tier, *rank).await?)
        }
        Command::Node { id } => Fetched::Node(client.get_node(*id).await?),
        Command::War { tier } => Fetched::War(client.get_war(*tier).await?),
    };
    Ok(fetched)
}

/// Install a stderr subscriber, preferring `RUST_LOG` over the `-v` level
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
