//! # Sell-Leg Executor
//!
//! Instructs one pool to accept an item set (pulled item-by-item from the
//! original caller through the gateway) and pay the proceeds to a
//! designated recipient, returning the realized amount.
//!
//! Strict paths pass a per-leg minimum of zero and defer all slippage
//! protection to one aggregate check after every leg completes; a per-leg
//! cap here would reject batches that are only profitable in aggregate.
//! Robust paths screen each leg against the caller's floor first.

use tracing::debug;

use crate::_4_COLLABORATORS::{CallContext, PoolCall, Quote};
use crate::infrastructure::errors::{Result, RouterError};
use crate::types::outcome::SkipReason;
use crate::types::{AccountId, Amount, NftId};

/// Execute one disposal leg, paying proceeds to `recipient`.
pub fn execute_sell(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    pool_id: &AccountId,
    nft_ids: &[NftId],
    min_output: Amount,
    recipient: &AccountId,
) -> Result<Amount> {
    let pool = ctx
        .pools
        .pool_mut(pool_id)
        .ok_or(RouterError::UnknownPool(*pool_id))?;
    let mut call = PoolCall::pulled(
        &mut *ctx.ledger,
        ctx.registry,
        *router,
        *pool_id,
        ctx.caller,
    );
    let proceeds = pool.execute_sell(&mut call, nft_ids, min_output, recipient)?;
    debug!(pool = %pool_id, proceeds, items = nft_ids.len(), "sell leg executed");
    Ok(proceeds)
}

/// Robust pre-screen: fetch a fresh quote and check the caller's per-leg
/// floor. `Err` is the reason the leg should be skipped.
pub fn screen_sell(
    ctx: &mut CallContext<'_>,
    pool_id: &AccountId,
    nft_ids: &[NftId],
    min_proceeds: Amount,
) -> std::result::Result<Quote, SkipReason> {
    let Some(pool) = ctx.pools.pool_mut(pool_id) else {
        return Err(SkipReason::UnknownPool);
    };
    let quote = match pool.quote_sell(nft_ids) {
        Ok(quote) => quote,
        Err(error) => return Err(SkipReason::Quote(error)),
    };
    if quote.amount < min_proceeds {
        return Err(SkipReason::ProceedsBelowFloor {
            quoted: quote.amount,
            min_proceeds,
        });
    }
    Ok(quote)
}
