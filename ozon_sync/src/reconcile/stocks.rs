//! Stock levels for every listed offer

use std::collections::HashSet;

use crate::distributor::DistributorRecord;
use crate::error::{Result, SyncError};
use crate::ozon::StockUpdate;

/// Quantity the distributor writes for "more than ten in stock"
pub const PLENTY_QUANTITY: &str = ">10";

/// Quantity the distributor writes for a unit that is not for sale
pub const UNAVAILABLE_QUANTITY: &str = "1";

/// Upper bound of the stock value pushed to Ozon
pub const MAX_STOCK: u32 = 100;

/// Map a raw quantity cell to the stock value sent to Ozon.
///
/// `">10"` becomes [`MAX_STOCK`] and the `"1"` sentinel becomes 0. Anything
/// else must be a non-negative integer and is capped at [`MAX_STOCK`].
pub fn stock_from_quantity(offer_id: &str, quantity: &str) -> Result<u32> {
    match quantity {
        PLENTY_QUANTITY => Ok(MAX_STOCK),
        UNAVAILABLE_QUANTITY => Ok(0),
        other => other
            .trim()
            .parse::<u32>()
            .map(|count| count.min(MAX_STOCK))
            .map_err(|_| SyncError::InvalidQuantity {
                offer_id: offer_id.to_string(),
                value: other.to_string(),
            }),
    }
}

/// Build the stock update for every offer in `offer_ids`.
///
/// Offers found in the stock file come first, in file order, with their
/// converted quantity. The first record wins when a code repeats. Offers
/// missing from the file follow in `offer_ids` order with stock 0. Each
/// offer id appears exactly once in the result.
pub fn create_stocks(
    records: &[DistributorRecord],
    offer_ids: &[String],
) -> Result<Vec<StockUpdate>> {
    let mut remaining: HashSet<&str> = offer_ids.iter().map(String::as_str).collect();
    let mut stocks = Vec::with_capacity(remaining.len());

    for record in records {
        if !remaining.remove(record.code.as_str()) {
            continue;
        }
        let stock = stock_from_quantity(&record.code, &record.quantity)?;
        stocks.push(StockUpdate::new(record.code.clone(), stock));
    }

    let matched = stocks.len();
    for offer_id in offer_ids {
        if remaining.remove(offer_id.as_str()) {
            stocks.push(StockUpdate::new(offer_id.clone(), 0));
        }
    }

    log::info!(
        "Prepared {} stock updates ({} from stock file, {} zeroed)",
        stocks.len(),
        matched,
        stocks.len() - matched
    );
    Ok(stocks)
}
