//! Stock and price sync runs against an Ozon seller account
//!
//! Each step fetches its own copy of the account's offer ids, reconciles them
//! with the distributor records and submits the result batch by batch. Batches
//! go out one at a time and the first failed submission ends the step.

use crate::chunking::{chunked, MAX_PRICE_CHUNK_SIZE, STOCK_CHUNK_SIZE};
use crate::distributor::DistributorRecord;
use crate::error::{Result, SyncError};
use crate::ozon::{OzonClient, PriceUpdate, StockUpdate};
use crate::reconcile::{create_prices, create_stocks};

/// Batch size the command line uses for price updates by default
pub const DEFAULT_PRICE_CHUNK_SIZE: usize = 900;

/// Outcome of a stock sync
#[derive(Debug, Clone, Default)]
pub struct StockSyncReport {
    /// Every stock update that was submitted
    pub stocks: Vec<StockUpdate>,
    /// The subset with a non-zero stock level
    pub not_empty: Vec<StockUpdate>,
}

/// Outcome of a full run
#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    pub stocks: StockSyncReport,
    pub prices: Vec<PriceUpdate>,
}

/// Push stock levels for every listed offer, [`STOCK_CHUNK_SIZE`] at a time.
pub async fn upload_stocks(
    client: &OzonClient,
    records: &[DistributorRecord],
) -> Result<StockSyncReport> {
    let offer_ids = client.offer_ids().await?;
    let stocks = create_stocks(records, &offer_ids)?;

    for (i, batch) in chunked(&stocks, STOCK_CHUNK_SIZE)?.enumerate() {
        log::info!("Submitting stock batch {} ({} offers)", i + 1, batch.len());
        client.update_stocks(batch).await?;
    }

    let not_empty: Vec<StockUpdate> = stocks.iter().filter(|s| s.stock != 0).cloned().collect();
    log::info!(
        "Stock sync done: {} offers updated, {} in stock",
        stocks.len(),
        not_empty.len()
    );

    Ok(StockSyncReport { stocks, not_empty })
}

/// Push prices for listed offers found in the stock file, `chunk_size` at a time.
///
/// `chunk_size` must be between 1 and [`MAX_PRICE_CHUNK_SIZE`].
pub async fn upload_prices(
    client: &OzonClient,
    records: &[DistributorRecord],
    chunk_size: usize,
) -> Result<Vec<PriceUpdate>> {
    if chunk_size == 0 || chunk_size > MAX_PRICE_CHUNK_SIZE {
        return Err(SyncError::InvalidChunkSize(chunk_size));
    }

    let offer_ids = client.offer_ids().await?;
    let prices = create_prices(records, &offer_ids)?;

    for (i, batch) in chunked(&prices, chunk_size)?.enumerate() {
        log::info!("Submitting price batch {} ({} offers)", i + 1, batch.len());
        client.update_prices(batch).await?;
    }

    log::info!("Price sync done: {} offers updated", prices.len());
    Ok(prices)
}

/// Stocks first, then prices.
pub async fn run(
    client: &OzonClient,
    records: &[DistributorRecord],
    price_chunk_size: usize,
) -> Result<SyncSummary> {
    let stocks = upload_stocks(client, records).await?;
    let prices = upload_prices(client, records, price_chunk_size).await?;
    Ok(SyncSummary { stocks, prices })
}
