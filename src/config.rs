use clap::Args;
use std::path::PathBuf;

use crate::evm::DEFAULT_ETH_RPC_URL;
use crate::price::DEFAULT_PRICE_API_URL;
use crate::solana::DEFAULT_SOLANA_RPC_URL;

/// Endpoints and input of a balance report
#[derive(Debug, Clone, Args)]
pub struct ReportConfig {
    /// File with one address per line
    #[arg(long, env = "ADDRESSES_FILE", default_value = "addresses.txt")]
    pub file: PathBuf,

    /// Ethereum RPC URL
    #[arg(long, env = "ETH_RPC_URL", default_value = DEFAULT_ETH_RPC_URL)]
    pub eth_rpc_url: String,

    /// Solana RPC URL
    #[arg(long, env = "SOLANA_RPC_URL", default_value = DEFAULT_SOLANA_RPC_URL)]
    pub solana_rpc_url: String,

    /// CoinGecko-compatible price API base URL
    #[arg(long, env = "PRICE_API_URL", default_value = DEFAULT_PRICE_API_URL)]
    pub price_api_url: String,

    /// CoinGecko demo API key
    #[arg(long, env = "COINGECKO_API_KEY")]
    pub coingecko_api_key: Option<String>,

    /// Stop at the first failed balance lookup instead of skipping the address
    #[arg(long, env = "FAIL_FAST")]
    pub fail_fast: bool,
}
