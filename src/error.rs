use std::path::PathBuf;
use thiserror::Error;

/// A line that matches neither the Ethereum nor the Solana address pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an ethereum or solana address: {0}")]
pub struct UnrecognizedAddress(pub String);

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a chain RPC balance lookup.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("Balance conversion failed: {0}")]
    Conversion(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("balance lookup for {address} failed: {source}")]
    Chain {
        address: String,
        #[source]
        source: ChainError,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
