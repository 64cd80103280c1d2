#![allow(dead_code)]

use async_trait::async_trait;
use balancex::{BalanceProvider, Chain, ChainError, PriceOracle, PriceQuote};
use ethers::types::U256;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const ETH_ADDRESS: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
pub const SOL_ADDRESS: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Balance provider answering from a fixed table and recording lookups.
#[derive(Debug, Clone)]
pub struct MockBalances {
    chain: Chain,
    balances: Arc<Mutex<HashMap<String, U256>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockBalances {
    pub fn new(chain: Chain) -> Self {
        Self {
            chain,
            balances: Arc::default(),
            calls: Arc::default(),
        }
    }

    /// Builder method to set the base-unit balance of an address
    pub fn with_balance(self, address: &str, base_units: impl Into<U256>) -> Self {
        self.balances
            .lock()
            .unwrap()
            .insert(address.to_string(), base_units.into());
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BalanceProvider for MockBalances {
    fn chain(&self) -> Chain {
        self.chain
    }

    async fn native_balance(&self, address: &str) -> Result<U256, ChainError> {
        self.calls.lock().unwrap().push(address.to_string());
        self.balances
            .lock()
            .unwrap()
            .get(address)
            .copied()
            .ok_or_else(|| ChainError::Rpc(format!("no balance configured for {}", address)))
    }
}

/// Price oracle with fixed quotes per chain, recording every request.
#[derive(Debug, Clone, Default)]
pub struct MockPrices {
    quotes: Arc<Mutex<HashMap<Chain, PriceQuote>>>,
    calls: Arc<Mutex<Vec<Chain>>>,
}

impl MockPrices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(self, chain: Chain, usd: f64) -> Self {
        self.quotes.lock().unwrap().insert(chain, PriceQuote::Usd(usd));
        self
    }

    pub fn get_calls(&self) -> Vec<Chain> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceOracle for MockPrices {
    async fn quote(&self, chain: Chain) -> PriceQuote {
        self.calls.lock().unwrap().push(chain);
        self.quotes
            .lock()
            .unwrap()
            .get(&chain)
            .copied()
            .unwrap_or(PriceQuote::Unavailable)
    }
}
