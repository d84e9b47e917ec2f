use std::env;

use alloy::primitives::Address;
use clap::{Parser, Subcommand};
use serde::Serialize;

use truemarket::config::ClientConfig;
use truemarket::TrueMarketClient;

#[derive(Parser)]
#[command(about = "Read TrueMarket markets from the Polynance helper contract")]
struct Args {
    #[command(subcommand)]
    command: Commands,
    /// Overrides TRUEMARKET_RPC_URL
    #[arg(long, global = true)]
    rpc_url: Option<String>,
    /// Overrides TRUEMARKET_HELPER_ADDRESS
    #[arg(long, global = true)]
    helper: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List active market addresses
    Addresses,
    /// Print one market as an SDK event
    Market { address: Address },
    /// Print the raw on-chain record of one market
    Detail { address: Address },
    /// Print one page of active markets
    Page {
        page: u64,
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Print every active market
    Active,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = ClientConfig::from_lookup(|key| match key {
        "TRUEMARKET_RPC_URL" => args.rpc_url.clone().or_else(|| env::var(key).ok()),
        "TRUEMARKET_HELPER_ADDRESS" => args.helper.clone().or_else(|| env::var(key).ok()),
        _ => env::var(key).ok(),
    })?;

    tracing::debug!(
        rpc_url = %config.rpc_url,
        helper = %config.helper_address,
        page_size = config.page_size,
        "Starting truemarket-cli"
    );

    let client = TrueMarketClient::from_config(&config)?;

    match args.command {
        Commands::Addresses => print_json(&client.get_all_active_markets_address().await?),
        Commands::Market { address } => print_json(&client.get_market_by_address(address).await?),
        Commands::Detail { address } => print_json(&client.get_market_detail(address).await?),
        Commands::Page { page, limit } => {
            let limit = limit.unwrap_or(config.page_size);
            print_json(&client.get_all_active_market_details(page, limit).await?)
        }
        Commands::Active => print_json(&client.get_active_markets().await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
