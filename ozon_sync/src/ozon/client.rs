//! HTTP plumbing for the Ozon Seller API

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::models::{
    PriceUpdate, PricesRequest, ProductListFilter, ProductListRequest, ProductListResponse,
    ProductListResult, StockUpdate, StocksRequest,
};
use crate::error::{Result, SyncError};

/// Production Seller API host
pub const OZON_API_URL: &str = "https://api-seller.ozon.ru";

/// Largest page `/v3/product/list` will return
pub const PRODUCT_LIST_LIMIT: u32 = 1000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated client for one Ozon seller account
pub struct OzonClient {
    client: reqwest::Client,
    base_url: String,
    client_id: String,
    api_key: String,
}

impl OzonClient {
    /// Creates a client for the production API with the given credentials.
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("ozon_sync/1.0")
            .build()?;

        let client_id = client_id.into();
        log::debug!("Creating Ozon API client for Client-Id {}", client_id);

        Ok(Self {
            client,
            base_url: OZON_API_URL.to_string(),
            client_id,
            api_key: api_key.into(),
        })
    }

    /// Points the client at another host (mock servers, sandboxes).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Underlying HTTP client, shared with the stock download
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Client-Id", &self.client_id)
            .header("Api-Key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Ozon API request {} failed with status {}: {}", path, status, body);
            return Err(SyncError::HttpStatus { status, body });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch one page of listings starting after `last_id` (empty for the first page).
    pub async fn product_list(&self, last_id: &str) -> Result<ProductListResult> {
        let request = ProductListRequest {
            filter: ProductListFilter { visibility: "ALL" },
            last_id,
            limit: PRODUCT_LIST_LIMIT,
        };
        let response: ProductListResponse = self.post("/v3/product/list", &request).await?;
        Ok(response.result)
    }

    /// Collect the offer identifiers of every listing in the account.
    ///
    /// Pages are requested until the accumulated count reaches the reported
    /// total. An empty page before that point stops the walk with a warning.
    pub async fn offer_ids(&self) -> Result<Vec<String>> {
        let mut last_id = String::new();
        let mut offer_ids = Vec::new();

        loop {
            let page = self.product_list(&last_id).await?;
            let page_len = page.items.len();
            offer_ids.extend(page.items.into_iter().map(|item| item.offer_id));
            log::debug!(
                "Fetched {} listings ({} of {})",
                page_len,
                offer_ids.len(),
                page.total
            );

            if offer_ids.len() as u64 >= page.total {
                break;
            }
            if page_len == 0 {
                log::warn!(
                    "Ozon returned an empty page after {} of {} listings, stopping",
                    offer_ids.len(),
                    page.total
                );
                break;
            }
            last_id = page.last_id;
        }

        log::info!("Fetched {} offer ids from Ozon", offer_ids.len());
        Ok(offer_ids)
    }

    /// Push one batch of stock levels. The response is returned undecoded.
    pub async fn update_stocks(&self, stocks: &[StockUpdate]) -> Result<serde_json::Value> {
        log::debug!("Updating stocks for {} offers", stocks.len());
        self.post("/v1/product/import/stocks", &StocksRequest { stocks })
            .await
    }

    /// Push one batch of prices. The response is returned undecoded.
    pub async fn update_prices(&self, prices: &[PriceUpdate]) -> Result<serde_json::Value> {
        log::debug!("Updating prices for {} offers", prices.len());
        self.post("/v1/product/import/prices", &PricesRequest { prices })
            .await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
