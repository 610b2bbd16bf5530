//! Shared identifiers and domain types

pub mod legs;
pub mod outcome;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fungible amount (native value or token) in base units.
pub type Amount = u128;

/// Identifier of one non-fungible item in the traded collection.
pub type NftId = u64;

/// Absolute instant in nanoseconds, supplied by the host per call.
pub type Timestamp = u64;

/// Opaque 32-byte account identifier for callers, pools, and recipients.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }

    /// Deterministic id from a single-byte seed. Mainly useful in fixtures.
    pub const fn from_seed(seed: u8) -> Self {
        AccountId([seed; 32])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Leading 8 hex chars are enough to tell accounts apart in logs
        for byte in &self.0[..4] {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self)
    }
}

/// Asset backing of a registered pool, as classified by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoolKind {
    /// Pool trades NFTs against the chain's native value unit.
    Value,
    /// Pool trades NFTs against a fungible token.
    Token,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Value => write!(f, "value"),
            PoolKind::Token => write!(f, "token"),
        }
    }
}
