use async_trait::async_trait;
use ethers::prelude::*;
use tracing::debug;

use crate::address::Chain;
use crate::chain::BalanceProvider;
use crate::error::ChainError;

pub const DEFAULT_ETH_RPC_URL: &str = "https://rpc.ankr.com/eth";

/// Ethereum mainnet balance lookups over JSON-RPC.
#[derive(Debug, Clone)]
pub struct EthereumClient {
    rpc_url: String,
    provider: Provider<Http>,
}

impl EthereumClient {
    /// Build a client for `rpc_url`. No request is sent until a balance is
    /// asked for.
    pub fn new(rpc_url: &str) -> Result<Self, ChainError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| ChainError::Rpc(format!("invalid RPC URL {}: {}", rpc_url, e)))?;

        Ok(EthereumClient {
            rpc_url: rpc_url.to_string(),
            provider,
        })
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl BalanceProvider for EthereumClient {
    fn chain(&self) -> Chain {
        Chain::Ethereum
    }

    async fn native_balance(&self, address: &str) -> Result<U256, ChainError> {
        let account = address
            .parse::<H160>()
            .map_err(|e| ChainError::InvalidAddress {
                address: address.to_string(),
                reason: e.to_string(),
            })?;

        let balance = self
            .provider
            .get_balance(account, None)
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))?;

        debug!("{} balance: {} wei", address, balance);
        Ok(balance)
    }
}
