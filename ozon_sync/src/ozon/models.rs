//! Ozon Seller API request and response payloads

use serde::{Deserialize, Serialize};

/// Body for `POST /v3/product/list`
#[derive(Debug, Serialize)]
pub struct ProductListRequest<'a> {
    pub filter: ProductListFilter,
    pub last_id: &'a str,
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct ProductListFilter {
    pub visibility: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ProductListResponse {
    pub result: ProductListResult,
}

/// One page of the seller's listings
#[derive(Debug, Deserialize)]
pub struct ProductListResult {
    #[serde(default)]
    pub items: Vec<ProductListItem>,
    pub total: u64,
    /// Cursor for the next page
    #[serde(default)]
    pub last_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListItem {
    pub offer_id: String,
}

/// Entry for `POST /v1/product/import/stocks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub offer_id: String,
    pub stock: u32,
}

impl StockUpdate {
    pub fn new(offer_id: impl Into<String>, stock: u32) -> Self {
        Self {
            offer_id: offer_id.into(),
            stock,
        }
    }
}

/// Entry for `POST /v1/product/import/prices`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub auto_action_enabled: String,
    pub currency_code: String,
    pub offer_id: String,
    pub old_price: String,
    pub price: String,
}

impl PriceUpdate {
    /// Price in roubles with no previous price and promotions left untouched
    pub fn new(offer_id: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            auto_action_enabled: "UNKNOWN".to_string(),
            currency_code: "RUB".to_string(),
            offer_id: offer_id.into(),
            old_price: "0".to_string(),
            price: price.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StocksRequest<'a> {
    pub stocks: &'a [StockUpdate],
}

#[derive(Debug, Serialize)]
pub(crate) struct PricesRequest<'a> {
    pub prices: &'a [PriceUpdate],
}
