use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::{fmt, str::FromStr};

use crate::error::UnrecognizedAddress;

lazy_static! {
    static ref ETHEREUM_ADDRESS: Regex = Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap();
    // Base58: no 0, I, O or l
    static ref SOLANA_ADDRESS: Regex = Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").unwrap();
}

/// Supported chains. Each variant carries the constants of its native token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Solana,
}

impl Chain {
    pub fn name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Solana => "solana",
        }
    }

    /// Ticker of the native token.
    pub fn symbol(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ETH",
            Chain::Solana => "SOL",
        }
    }

    /// Decimal exponent between the base unit (wei, lamports) and one token.
    pub fn decimals(&self) -> u32 {
        match self {
            Chain::Ethereum => 18,
            Chain::Solana => 9,
        }
    }

    /// Identifier of the native token on the price API.
    pub fn price_id(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Solana => "solana",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A syntactically valid address tagged with its chain.
///
/// The only way to build one is [`classify`], so the value always matches
/// the pattern of its chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    chain: Chain,
    value: String,
}

impl Address {
    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Address {
    type Err = UnrecognizedAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify(s)
    }
}

pub fn is_ethereum_address(raw: &str) -> bool {
    ETHEREUM_ADDRESS.is_match(raw)
}

pub fn is_solana_address(raw: &str) -> bool {
    SOLANA_ADDRESS.is_match(raw)
}

/// Classify a raw string as an Ethereum or Solana address.
///
/// Ethereum is tested first. The input is taken as-is: no trimming and no
/// case normalisation.
pub fn classify(raw: &str) -> Result<Address, UnrecognizedAddress> {
    let chain = if is_ethereum_address(raw) {
        Chain::Ethereum
    } else if is_solana_address(raw) {
        Chain::Solana
    } else {
        return Err(UnrecognizedAddress(raw.to_string()));
    };

    Ok(Address {
        chain,
        value: raw.to_string(),
    })
}
