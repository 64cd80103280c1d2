use async_trait::async_trait;
use ethers::types::U256;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};
use std::{str::FromStr, sync::Arc};
use tracing::debug;

use crate::address::Chain;
use crate::chain::BalanceProvider;
use crate::error::ChainError;

pub const DEFAULT_SOLANA_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Solana mainnet balance lookups over JSON-RPC at `confirmed` commitment.
#[derive(Clone)]
pub struct SolanaClient {
    rpc_url: String,
    client: Arc<RpcClient>,
}

impl SolanaClient {
    pub fn new(rpc_url: &str) -> Self {
        let client = Arc::new(RpcClient::new_with_commitment(
            rpc_url.to_string(),
            CommitmentConfig::confirmed(),
        ));

        SolanaClient {
            rpc_url: rpc_url.to_string(),
            client,
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl BalanceProvider for SolanaClient {
    fn chain(&self) -> Chain {
        Chain::Solana
    }

    async fn native_balance(&self, address: &str) -> Result<U256, ChainError> {
        let pubkey = Pubkey::from_str(address).map_err(|e| ChainError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })?;

        // RpcClient is blocking
        let client = Arc::clone(&self.client);
        let lamports = tokio::task::spawn_blocking(move || client.get_balance(&pubkey))
            .await
            .map_err(|e| ChainError::Rpc(format!("Task join error: {}", e)))?
            .map_err(|e| ChainError::Rpc(e.to_string()))?;

        debug!("{} balance: {} lamports", address, lamports);
        Ok(U256::from(lamports))
    }
}
