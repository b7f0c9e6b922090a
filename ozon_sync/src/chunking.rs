//! Splitting update payloads into API-sized batches

use crate::error::{Result, SyncError};

/// Maximum number of stock entries Ozon accepts per update call
pub const STOCK_CHUNK_SIZE: usize = 100;

/// Maximum number of price entries Ozon accepts per update call
pub const MAX_PRICE_CHUNK_SIZE: usize = 1000;

/// Split `items` into contiguous batches of `size` elements.
///
/// Every batch has exactly `size` elements except possibly the last one.
/// Order is preserved and every element appears exactly once. The returned
/// iterator borrows `items`, so calling this again restarts from the top.
///
/// Fails with [`SyncError::InvalidChunkSize`] when `size` is zero.
pub fn chunked<T>(items: &[T], size: usize) -> Result<std::slice::Chunks<'_, T>> {
    if size == 0 {
        return Err(SyncError::InvalidChunkSize(size));
    }
    Ok(items.chunks(size))
}
