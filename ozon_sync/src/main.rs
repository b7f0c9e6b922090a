//! Ozon Sync - distributor stock & prices to Ozon
//!
//! Runs one stock sync followed by one price sync and exits.

use clap::Parser;
use ozon_sync::distributor::{self, STOCK_ARCHIVE_URL};
use ozon_sync::ozon::OZON_API_URL;
use ozon_sync::sync::{self, DEFAULT_PRICE_CHUNK_SIZE};
use ozon_sync::{OzonClient, SyncError};
use std::path::PathBuf;

/// Push distributor stock levels and prices to an Ozon seller account
#[derive(Parser, Debug)]
#[command(name = "ozon_sync")]
#[command(version, about, long_about = None)]
struct Args {
    /// Ozon seller Client-Id
    #[arg(long, env = "CLIENT_ID")]
    client_id: String,

    /// Ozon seller API key
    #[arg(long, env = "SELLER_TOKEN", hide_env_values = true)]
    seller_token: String,

    /// Use a local .xls/.xlsx/.csv stock file instead of downloading the archive
    #[arg(long)]
    stock_file: Option<PathBuf>,

    /// Distributor stock archive URL
    #[arg(long, default_value = STOCK_ARCHIVE_URL)]
    stock_url: String,

    /// Ozon Seller API base URL
    #[arg(long, default_value = OZON_API_URL)]
    api_url: String,

    /// Number of prices submitted per request (at most 1000)
    #[arg(long, default_value_t = DEFAULT_PRICE_CHUNK_SIZE)]
    price_chunk_size: usize,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting ozon_sync...");

    if let Err(e) = run(&args).await {
        report(&e);
        std::process::exit(1);
    }

    log::info!("Sync completed successfully.");
}

async fn run(args: &Args) -> ozon_sync::Result<()> {
    let client = OzonClient::new(&args.client_id, &args.seller_token)?.with_base_url(&args.api_url);

    let records = match &args.stock_file {
        Some(path) => distributor::load_stock_file(path)?,
        None => distributor::download_stock(client.http(), &args.stock_url).await?,
    };

    let summary = sync::run(&client, &records, args.price_chunk_size).await?;
    log::info!(
        "Updated {} stocks ({} in stock) and {} prices",
        summary.stocks.stocks.len(),
        summary.stocks.not_empty.len(),
        summary.prices.len()
    );
    Ok(())
}

fn report(error: &SyncError) {
    if error.is_timeout() {
        log::error!("Request timed out: {}", error);
    } else if error.is_connect() {
        log::error!("Connection error: {}", error);
    } else if error.is_transport() {
        log::error!("Ozon or distributor request failed: {}", error);
    } else {
        log::error!("Sync aborted: {}", error);
    }
}
