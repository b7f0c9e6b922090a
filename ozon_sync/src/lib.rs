//! Ozon Sync - distributor stock & prices to an Ozon seller account
//!
//! Downloads the distributor's stock workbook, matches it against the offers
//! listed in the seller account and pushes stock levels and prices through the
//! Ozon Seller API in capped batches.

pub mod chunking;
pub mod distributor;
pub mod error;
pub mod ozon;
pub mod price;
pub mod reconcile;
pub mod sync;

pub use chunking::chunked;
pub use distributor::{CellValue, DistributorRecord};
pub use error::{Error, Result, SyncError};
pub use ozon::{OzonClient, PriceUpdate, StockUpdate};
pub use price::normalize_price;
pub use reconcile::{create_prices, create_stocks};
pub use sync::{upload_prices, upload_stocks, StockSyncReport, SyncSummary};
