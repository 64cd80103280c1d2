use std::{fs, path::Path};
use tracing::{debug, error, warn};

use crate::address::{classify, Address};
use crate::error::LoadError;

/// A non-blank input line that is neither an Ethereum nor a Solana address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the source file
    pub line: usize,
    pub text: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedAddresses {
    pub addresses: Vec<Address>,
    pub rejected: Vec<RejectedLine>,
}

/// Parse newline-delimited addresses. Lines are trimmed and blank lines
/// dropped; source order is preserved.
pub fn parse_addresses(content: &str) -> ParsedAddresses {
    let mut parsed = ParsedAddresses::default();

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match classify(line) {
            Ok(address) => parsed.addresses.push(address),
            Err(_) => parsed.rejected.push(RejectedLine {
                line: i + 1,
                text: line.to_string(),
            }),
        }
    }

    parsed
}

pub fn read_addresses(path: impl AsRef<Path>) -> Result<ParsedAddresses, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_addresses(&content))
}

/// Load the address list from `path`.
///
/// Never fails: each unrecognized line is logged and skipped, and an
/// unreadable file yields an empty list.
pub fn load(path: impl AsRef<Path>) -> Vec<Address> {
    let path = path.as_ref();

    let parsed = match read_addresses(path) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("{}", e);
            return Vec::new();
        }
    };

    for rejected in &parsed.rejected {
        warn!(
            "line {}: {} is not an ethereum or solana address, skipping",
            rejected.line, rejected.text
        );
    }

    debug!(
        "loaded {} addresses from {} ({} rejected)",
        parsed.addresses.len(),
        path.display(),
        parsed.rejected.len()
    );

    parsed.addresses
}
