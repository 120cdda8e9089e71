//! Market Price - warframe.market price check
//!
//! Prints the highest visible buy order and the lowest visible sell order
//! for one item.

use std::io;
use std::time::Duration;

use clap::Parser;
use market_price::{run, ClientConfig, MarketClient};

/// Look up the best buy and sell price of a warframe.market item
#[derive(Parser, Debug)]
#[command(name = "market_price")]
#[command(version, about, long_about = None)]
struct Args {
    /// Item name; prompts on stdin when omitted
    item: Vec<String>,

    /// API root the order endpoint is appended to
    #[arg(long, default_value = market_price::market::DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = ClientConfig::default()
        .with_base_url(args.api_url)
        .with_timeout(args.timeout_secs.map(Duration::from_secs));

    let client = match MarketClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();

    match run(&client, &args.item, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(outcome) => log::debug!("Lookup finished: {:?}", outcome),
        Err(e) => {
            log::error!("Lookup failed: {}", e);
            std::process::exit(1);
        }
    }
}
