use std::io::Write;
use tracing::{info, warn};

use crate::address::{Address, Chain};
use crate::chain::{format_balance, BalanceProvider};
use crate::config::ReportConfig;
use crate::error::{ChainError, ReportError};
use crate::evm::EthereumClient;
use crate::price::{CoinGeckoOracle, PriceOracle};
use crate::solana::SolanaClient;

/// Outcome of one report run.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub total_usd: f64,
    /// Addresses that got a report line.
    pub reported: usize,
    /// Addresses skipped because their balance lookup failed.
    pub skipped: usize,
    /// Reported addresses whose price was unavailable.
    pub unpriced: usize,
}

/// Prints native balances and their USD value for a list of addresses.
pub struct BalanceReporter {
    ethereum: Box<dyn BalanceProvider>,
    solana: Box<dyn BalanceProvider>,
    prices: Box<dyn PriceOracle>,
    fail_fast: bool,
}

impl BalanceReporter {
    pub fn new(
        ethereum: Box<dyn BalanceProvider>,
        solana: Box<dyn BalanceProvider>,
        prices: Box<dyn PriceOracle>,
    ) -> Self {
        debug_assert_eq!(ethereum.chain(), Chain::Ethereum);
        debug_assert_eq!(solana.chain(), Chain::Solana);

        BalanceReporter {
            ethereum,
            solana,
            prices,
            fail_fast: false,
        }
    }

    /// Abort the run on the first balance lookup failure instead of
    /// skipping the address.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Reporter wired to the live RPC nodes and price API.
    pub fn from_config(config: &ReportConfig) -> Result<Self, ChainError> {
        let ethereum = EthereumClient::new(&config.eth_rpc_url)?;
        let solana = SolanaClient::new(&config.solana_rpc_url);
        let prices = CoinGeckoOracle::new(
            config.price_api_url.clone(),
            config.coingecko_api_key.clone(),
        );

        Ok(Self::new(Box::new(ethereum), Box::new(solana), Box::new(prices))
            .fail_fast(config.fail_fast))
    }

    fn provider(&self, chain: Chain) -> &dyn BalanceProvider {
        match chain {
            Chain::Ethereum => self.ethereum.as_ref(),
            Chain::Solana => self.solana.as_ref(),
        }
    }

    /// Fetch every balance in order, one request at a time, and write the
    /// report to `out`.
    pub async fn report<W: Write>(
        &self,
        addresses: &[Address],
        out: &mut W,
    ) -> Result<ReportSummary, ReportError> {
        let mut summary = ReportSummary::default();

        for (i, address) in addresses.iter().enumerate() {
            let index = i + 1;
            let chain = address.chain();

            let balance = match self.balance_of(address).await {
                Ok(balance) => balance,
                Err(source) if self.fail_fast => {
                    return Err(ReportError::Chain {
                        address: address.value().to_string(),
                        source,
                    });
                }
                Err(e) => {
                    warn!("{}. {} ({}): skipped, {}", index, address, chain, e);
                    summary.skipped += 1;
                    continue;
                }
            };

            let quote = self.prices.quote(chain).await;
            let amount = balance.parse::<f64>().unwrap_or_default();

            match quote.value_of(amount) {
                Some(usd) => {
                    summary.total_usd += usd;
                    writeln!(
                        out,
                        "{}. {} ({}): {} ${} or ${:.5}",
                        index,
                        address,
                        chain,
                        balance,
                        chain.symbol(),
                        usd
                    )?;
                }
                None => {
                    summary.unpriced += 1;
                    writeln!(
                        out,
                        "{}. {} ({}): {} ${} or $? (price unavailable)",
                        index,
                        address,
                        chain,
                        balance,
                        chain.symbol()
                    )?;
                }
            }
            summary.reported += 1;
        }

        if summary.reported > 0 {
            writeln!(out, "---")?;
        }
        writeln!(out, "total: ${:.5}", summary.total_usd)?;

        info!(
            "reported {} addresses ({} skipped, {} without price), total ${:.5}",
            summary.reported, summary.skipped, summary.unpriced, summary.total_usd
        );
        Ok(summary)
    }

    /// Native balance of `address` as a whole-token decimal string.
    async fn balance_of(&self, address: &Address) -> Result<String, ChainError> {
        let chain = address.chain();
        let raw = self.provider(chain).native_balance(address.value()).await?;
        format_balance(raw, chain.decimals())
    }
}
