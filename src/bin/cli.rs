//! Assetboard CLI
//!
//! Command-line companion to the relay:
//! - Fetch and value balances once
//! - Watch a running relay feed
//! - Check relay status
//! - Generate a config file

use anyhow::{bail, Context};
use assetboard::config::{generate_default_config, Config};
use assetboard::exchange::{BalanceSource, ExchangeClient};
use assetboard::{format_amount, value_balances, Balance};
use clap::{Parser, Subcommand};
use futures_util::StreamExt;
use std::path::PathBuf;
use tokio_tungstenite::{connect_async, tungstenite::Message};

#[derive(Parser)]
#[command(name = "assetboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect exchange balances and Assetboard relays")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch balances from the exchange once and value them
    Balances,

    /// Print every frame a relay sends
    Watch {
        /// Relay feed URL
        #[arg(long, default_value = "ws://localhost:8000/ws")]
        url: String,
    },

    /// Show relay health
    Status {
        /// Relay base URL
        #[arg(long, default_value = "http://localhost:8000")]
        url: String,
    },

    /// Generate default config file
    InitConfig {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Balances => {
            let config = match &cli.config {
                Some(path) => Config::load_with_env(path)?,
                None => Config::load_default()?,
            };
            if !config.exchange.has_credentials() {
                bail!("set ASSETBOARD_API_KEY and ASSETBOARD_SECRET_KEY (or the [exchange] keys)");
            }

            let quote = config.exchange.quote_asset.clone();
            let client = ExchangeClient::new(config.exchange)?;
            let account = client.account().await.context("fetching account")?;
            let prices = client.ticker_prices().await.context("fetching prices")?;

            let balances = value_balances(&account.balances, &prices, &quote);
            print_balances(&balances, &cli.format)?;
        }

        Commands::Watch { url } => {
            let (ws_stream, _) = connect_async(url.as_str())
                .await
                .with_context(|| format!("connecting to {}", url))?;
            eprintln!("Connected to {}", url);

            let (_write, mut read) = ws_stream.split();
            while let Some(frame) = read.next().await {
                match frame? {
                    Message::Text(text) => match serde_json::from_str::<Vec<Balance>>(&text) {
                        Ok(balances) => {
                            println!("{}", chrono::Local::now().format("%H:%M:%S"));
                            print_balances(&balances, &cli.format)?;
                        }
                        Err(_) => eprintln!("{}", text),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            eprintln!("Feed closed");
        }

        Commands::Status { url } => {
            let response = reqwest::get(format!("{}/health", url.trim_end_matches('/')))
                .await
                .with_context(|| format!("connecting to {}", url))?;
            let health: serde_json::Value = response.json().await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&health)?),
                _ => {
                    println!("Assetboard relay v{}", health["version"].as_str().unwrap_or("?"));
                    println!();
                    println!("Status:    {}", health["status"].as_str().unwrap_or("unknown"));
                    println!(
                        "Upstream:  {}",
                        if health["upstream"]["connected"].as_bool().unwrap_or(false) {
                            "connected"
                        } else {
                            "disconnected"
                        }
                    );
                    println!("Clients:   {}", health["clients"].as_u64().unwrap_or(0));
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime:    {}", format_duration(uptime));
                    }
                }
            }
        }

        Commands::InitConfig { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Wrote config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_balances(balances: &[Balance], format: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(balances)?);
        return Ok(());
    }

    println!("{:<10} {:>18} {:>18}", "Asset", "Free", "Locked");
    println!("{}", "-".repeat(48));
    for b in balances {
        println!(
            "{:<10} {:>18} {:>18}",
            b.asset,
            format_amount(b.free),
            format_amount(b.locked)
        );
    }
    if balances.is_empty() {
        println!("(no balances)");
    }
    Ok(())
}

fn format_duration(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m {}s", minutes, seconds % 60)
    }
}
