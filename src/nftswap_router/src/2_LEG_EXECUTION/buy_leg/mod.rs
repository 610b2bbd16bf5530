//! # Buy-Leg Executor
//!
//! Executes one acquisition leg (quantity-based or specific-item-set) and
//! returns the realized cost, as reported by the pool at execution time.
//!
//! ## Payment Routing
//! - Value path: native value cannot be pulled after the fact, so the exact
//!   cost must be known synchronously - the orchestrator quotes first and
//!   forwards exactly that amount to the pool before the purchase call.
//! - Token path: the pool pulls its cost from the original caller through
//!   the transfer gateway at swap time, so no prior quote is needed except
//!   where a per-leg cap must be screened beforehand.

use tracing::debug;

use crate::_4_COLLABORATORS::{BuySelection, CallContext, PoolCall, Quote};
use crate::infrastructure::errors::{Result, RouterError};
use crate::types::outcome::SkipReason;
use crate::types::{AccountId, Amount};

/// Fresh quote for a buy leg.
pub fn quote_buy(
    ctx: &mut CallContext<'_>,
    pool_id: &AccountId,
    selection: &BuySelection<'_>,
) -> Result<Quote> {
    let pool = ctx
        .pools
        .pool_mut(pool_id)
        .ok_or(RouterError::UnknownPool(*pool_id))?;
    Ok(pool.quote_buy(selection)?)
}

/// Execute a value-paid buy: forward `payment` in native value from router
/// custody to the pool, then invoke the purchase with `max_input` as the
/// hard cap and the original caller named as implicit transfer source.
pub fn execute_value_buy(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    pool_id: &AccountId,
    selection: &BuySelection<'_>,
    payment: Amount,
    max_input: Amount,
    recipient: &AccountId,
) -> Result<Amount> {
    let pool = ctx
        .pools
        .pool_mut(pool_id)
        .ok_or(RouterError::UnknownPool(*pool_id))?;
    ctx.ledger.transfer_value(router, pool_id, payment)?;
    let mut call = PoolCall::forwarded(
        &mut *ctx.ledger,
        ctx.registry,
        *router,
        *pool_id,
        ctx.caller,
        payment,
    );
    let cost = pool.execute_buy(&mut call, selection, max_input, recipient)?;
    debug!(pool = %pool_id, cost, forwarded = payment, "value buy leg executed");
    Ok(cost)
}

/// Execute a token-paid buy: the pool pulls exactly its cost from the
/// original caller through the gateway, capped at `max_input`.
pub fn execute_token_buy(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    pool_id: &AccountId,
    selection: &BuySelection<'_>,
    max_input: Amount,
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
    let cost = pool.execute_buy(&mut call, selection, max_input, recipient)?;
    debug!(pool = %pool_id, cost, "token buy leg executed");
    Ok(cost)
}

/// Robust pre-screen: fetch a fresh quote and check the caller's per-leg
/// cap. `Err` is the reason the leg should be skipped; a screened-out leg
/// never reaches the pool.
pub fn screen_buy(
    ctx: &mut CallContext<'_>,
    pool_id: &AccountId,
    selection: &BuySelection<'_>,
    max_cost: Amount,
) -> std::result::Result<Quote, SkipReason> {
    let Some(pool) = ctx.pools.pool_mut(pool_id) else {
        return Err(SkipReason::UnknownPool);
    };
    let quote = match pool.quote_buy(selection) {
        Ok(quote) => quote,
        Err(error) => return Err(SkipReason::Quote(error)),
    };
    if quote.amount > max_cost {
        return Err(SkipReason::CostAboveCap {
            quoted: quote.amount,
            max_cost,
        });
    }
    Ok(quote)
}
