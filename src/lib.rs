//! Balancex - native balance report for Ethereum and Solana addresses
//!
//! Reads addresses from a text file, looks up the ETH or SOL balance of each
//! one on its chain, prices it in USD and prints one line per address plus a
//! total.
//!
//! # Example
//!
//! ```no_run
//! use balancex::{loader, BalanceReporter, ReportConfig};
//! use clap::Parser;
//!
//! #[derive(Parser)]
//! struct Config {
//!     #[command(flatten)]
//!     report: ReportConfig,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::parse();
//!     let addresses = loader::load(&config.report.file);
//!
//!     let reporter = BalanceReporter::from_config(&config.report)?;
//!     let summary = reporter.report(&addresses, &mut std::io::stdout()).await?;
//!     println!("{} addresses", summary.reported);
//!
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod chain;
pub mod config;
pub mod error;
pub mod evm;
pub mod loader;
pub mod price;
pub mod report;
pub mod solana;

pub use address::{classify, Address, Chain};
pub use chain::BalanceProvider;
pub use config::ReportConfig;
pub use error::{ChainError, LoadError, ReportError, UnrecognizedAddress};
pub use evm::EthereumClient;
pub use price::{CoinGeckoOracle, PriceOracle, PriceQuote};
pub use report::{BalanceReporter, ReportSummary};
pub use solana::SolanaClient;
