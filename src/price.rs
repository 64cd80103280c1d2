use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::address::Chain;

pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3";

/// USD price of a chain's native token at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceQuote {
    Usd(f64),
    /// The lookup failed; this is not a price of zero.
    Unavailable,
}

impl PriceQuote {
    /// USD value of `amount` whole tokens, if a price is known.
    pub fn value_of(&self, amount: f64) -> Option<f64> {
        match self {
            PriceQuote::Usd(price) => Some(amount * price),
            PriceQuote::Unavailable => None,
        }
    }
}

#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Current USD price of the native token of `chain`. Never fails;
    /// lookup errors become [`PriceQuote::Unavailable`].
    async fn quote(&self, chain: Chain) -> PriceQuote;
}

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No price data for {0}")]
    NoPriceData(String),
    #[error("Invalid price for {id}: {price}")]
    InvalidPrice { id: String, price: f64 },
}

#[derive(Debug, Deserialize)]
struct UsdPrice {
    usd: Option<f64>,
}

/// Extract the USD price of `id` from a `simple/price` response body.
pub fn parse_price(body: &str, id: &str) -> Result<f64, PriceError> {
    let response: HashMap<String, UsdPrice> = serde_json::from_str(body)?;

    let price = response
        .get(id)
        .and_then(|p| p.usd)
        .ok_or_else(|| PriceError::NoPriceData(id.to_string()))?;

    if !price.is_finite() || price < 0.0 {
        return Err(PriceError::InvalidPrice {
            id: id.to_string(),
            price,
        });
    }

    Ok(price)
}

/// Price oracle backed by the CoinGecko `simple/price` endpoint.
#[derive(Debug, Clone)]
pub struct CoinGeckoOracle {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CoinGeckoOracle {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn fetch_price(&self, id: &str) -> Result<f64, PriceError> {
        let url = format!("{}/simple/price?ids={}&vs_currencies=usd", self.base_url, id);

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("x-cg-demo-api-key", key);
        }

        let body = request.send().await?.error_for_status()?.text().await?;
        parse_price(&body, id)
    }
}

impl Default for CoinGeckoOracle {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_API_URL, None)
    }
}

#[async_trait]
impl PriceOracle for CoinGeckoOracle {
    async fn quote(&self, chain: Chain) -> PriceQuote {
        let id = chain.price_id();
        match self.fetch_price(id).await {
            Ok(price) => {
                debug!("{} price: ${}", id, price);
                PriceQuote::Usd(price)
            }
            Err(e) => {
                warn!("price lookup for {} failed: {}", id, e);
                PriceQuote::Unavailable
            }
        }
    }
}
