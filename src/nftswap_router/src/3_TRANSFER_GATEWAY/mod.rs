//! # Privileged Transfer Gateway
//!
//! Pull-based transfers restricted to registered pools: moves assets
//! straight from an arbitrary source (typically the original trade
//! initiator) to the destination the pool names, in one hop, on the
//! router's spender/operator authority.
//!
//! ## Trust Boundary
//! This is the system's sole trust boundary. The registry is trusted
//! fully: a caller it does not attest as a registered pool of a kind
//! consistent with the asset is rejected with `Unauthorized`, lazily, at
//! the moment the transfer is pulled. No further validation happens here -
//! amount and ownership correctness are the transfer primitive's concern,
//! and it fails at the collaborator level if unauthorized.
//!
//! Fungible pulls require a token-backed pool; item pulls accept a
//! registered pool of either kind.

use tracing::debug;

use crate::_4_COLLABORATORS::{AssetLedger, Registry};
use crate::infrastructure::errors::{Result, RouterError};
use crate::types::{AccountId, Amount, NftId, PoolKind};

/// Pull `amount` fungible tokens from `from` to `to` for the calling pool.
///
/// `caller` must be registered as a token-backed pool; the movement uses
/// the allowance the source granted the router.
pub fn pull_fungible(
    registry: &dyn Registry,
    ledger: &mut dyn AssetLedger,
    router: &AccountId,
    caller: &AccountId,
    from: &AccountId,
    to: &AccountId,
    amount: Amount,
) -> Result<()> {
    if !registry.is_authorized_pool(caller, PoolKind::Token) {
        return Err(RouterError::Unauthorized { caller: *caller });
    }
    debug!(caller = %caller, from = %from, to = %to, amount, "gateway fungible pull");
    ledger.pull_fungible(router, from, to, amount)?;
    Ok(())
}

/// Pull one item from `from` to `to` for the calling pool.
///
/// `caller` must be a registered pool of either kind; the movement uses
/// the operator approval the source granted the router.
pub fn pull_nft(
    registry: &dyn Registry,
    ledger: &mut dyn AssetLedger,
    router: &AccountId,
    caller: &AccountId,
    from: &AccountId,
    to: &AccountId,
    nft_id: NftId,
) -> Result<()> {
    if !registry.is_authorized_pool(caller, PoolKind::Value)
        && !registry.is_authorized_pool(caller, PoolKind::Token)
    {
        return Err(RouterError::Unauthorized { caller: *caller });
    }
    debug!(caller = %caller, from = %from, to = %to, nft_id, "gateway item pull");
    ledger.pull_nft(router, from, to, nft_id)?;
    Ok(())
}
