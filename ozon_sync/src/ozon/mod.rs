//! Ozon Seller API client for listing offers and pushing stock and price updates

mod client;
mod models;

pub use client::{OzonClient, OZON_API_URL, PRODUCT_LIST_LIMIT};
pub use models::{
    PriceUpdate, ProductListFilter, ProductListItem, ProductListRequest, ProductListResponse,
    ProductListResult, StockUpdate,
};
