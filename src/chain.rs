use async_trait::async_trait;
use ethers::types::U256;
use ethers::utils::format_units;

use crate::address::Chain;
use crate::error::ChainError;

/// Source of native-token balances for one chain.
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    fn chain(&self) -> Chain;

    /// Balance of `address` in base units (wei, lamports).
    async fn native_balance(&self, address: &str) -> Result<U256, ChainError>;
}

/// Render a base-unit amount as a whole-token decimal, trailing zeros trimmed.
///
/// `1_500_000_000_000_000_000` wei with 18 decimals becomes `"1.5"`, ten SOL
/// in lamports becomes `"10"`.
pub fn format_balance(amount: U256, decimals: u32) -> Result<String, ChainError> {
    let formatted =
        format_units(amount, decimals).map_err(|e| ChainError::Conversion(e.to_string()))?;

    if !formatted.contains('.') {
        return Ok(formatted);
    }
    Ok(formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string())
}
