//! # Strict Batch Orchestration
//!
//! All-or-nothing compositions: any leg reporting a pricing error, any leg
//! whose realized cost would drive the running balance negative, and any
//! aggregate-bound failure abort the whole call. Under the host's
//! atomicity contract an aborted call has no partial effect.
//!
//! ## Running Balance
//! Each buy leg debits its realized cost, each sell leg credits its
//! realized proceeds. Amounts are determined by the pool at execution
//! time, never precomputed here - the only quote a strict path takes is
//! the one the value path needs to forward exact payment.
//!
//! ## Two-Sided Composition
//! Sell everything first with aggregate minimum 0, then hand the buy phase
//! the budget `proceeds + extra - min_output` and return
//! `leftover + min_output`. Because the buy phase cannot outspend its
//! budget, the returned amount is provably >= min_output without tracking
//! any per-leg minimum across the two phases.

use tracing::info;

use crate::_2_LEG_EXECUTION::{buy_leg, sell_leg};
use crate::_4_COLLABORATORS::{BuySelection, CallContext};
use crate::infrastructure::errors::{Result, RouterError};
use crate::infrastructure::math::{credit, debit};
use crate::types::legs::{
    AnyNftBuyLeg, NftsForAnyNftsTrade, NftsForSpecificNftsTrade, SpecificNftsLeg,
};
use crate::types::{AccountId, Amount};

/// Swap native value for any NFTs across pools.
///
/// Claims `attached` from the caller into router custody, buys leg by leg,
/// and refunds the remainder to `refund_to`. Returns the unspent amount.
pub fn swap_value_for_any_nfts(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[AnyNftBuyLeg],
    attached: Amount,
    refund_to: &AccountId,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    ctx.ledger.transfer_value(&ctx.caller, router, attached)?;
    info!(legs = legs.len(), attached, "strict value buy batch");
    let remaining = value_buys(router, ctx, any_selections(legs), attached, nft_recipient)?;
    refund_value(router, ctx, refund_to, remaining)?;
    Ok(remaining)
}

/// Swap native value for exactly the named NFTs.
pub fn swap_value_for_specific_nfts(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[SpecificNftsLeg],
    attached: Amount,
    refund_to: &AccountId,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    ctx.ledger.transfer_value(&ctx.caller, router, attached)?;
    info!(legs = legs.len(), attached, "strict value buy batch (specific)");
    let remaining = value_buys(router, ctx, specific_selections(legs), attached, nft_recipient)?;
    refund_value(router, ctx, refund_to, remaining)?;
    Ok(remaining)
}

/// Swap fungible tokens for any NFTs. Payment is pulled by each pool at
/// swap time, so only consumed amounts ever move and there is no refund
/// step. Returns the unspent part of the declared budget.
pub fn swap_token_for_any_nfts(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[AnyNftBuyLeg],
    input_budget: Amount,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    info!(legs = legs.len(), input_budget, "strict token buy batch");
    token_buys(router, ctx, any_selections(legs), input_budget, nft_recipient)
}

/// Swap fungible tokens for exactly the named NFTs.
pub fn swap_token_for_specific_nfts(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[SpecificNftsLeg],
    input_budget: Amount,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    info!(legs = legs.len(), input_budget, "strict token buy batch (specific)");
    token_buys(router, ctx, specific_selections(legs), input_budget, nft_recipient)
}

/// Sell NFT sets across pools for tokens, enforcing one aggregate minimum
/// after every leg completes.
pub fn swap_nfts_for_token(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[SpecificNftsLeg],
    min_output: Amount,
    proceeds_recipient: &AccountId,
) -> Result<Amount> {
    info!(legs = legs.len(), min_output, "strict sell batch");
    let output = sells(router, ctx, legs, proceeds_recipient)?;
    if output < min_output {
        return Err(RouterError::SlippageViolation {
            realized: output,
            minimum: min_output,
        });
    }
    Ok(output)
}

/// Two-sided trade through native value: sell one NFT set, buy any NFTs
/// with the proceeds plus `attached` extra value.
pub fn swap_nfts_for_any_nfts_through_value(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    trade: &NftsForAnyNftsTrade,
    attached: Amount,
    min_output: Amount,
    refund_to: &AccountId,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    through_value(
        router,
        ctx,
        &trade.sell_legs,
        any_selections(&trade.buy_legs),
        trade.buy_legs.len(),
        attached,
        min_output,
        refund_to,
        nft_recipient,
    )
}

/// Two-sided trade through native value into exactly the named NFTs.
pub fn swap_nfts_for_specific_nfts_through_value(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    trade: &NftsForSpecificNftsTrade,
    attached: Amount,
    min_output: Amount,
    refund_to: &AccountId,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    through_value(
        router,
        ctx,
        &trade.sell_legs,
        specific_selections(&trade.buy_legs),
        trade.buy_legs.len(),
        attached,
        min_output,
        refund_to,
        nft_recipient,
    )
}

/// Two-sided trade through the fungible token: sell one NFT set, buy any
/// NFTs with the proceeds plus `extra_input` of pull budget.
pub fn swap_nfts_for_any_nfts_through_token(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    trade: &NftsForAnyNftsTrade,
    extra_input: Amount,
    min_output: Amount,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    through_token(
        router,
        ctx,
        &trade.sell_legs,
        any_selections(&trade.buy_legs),
        trade.buy_legs.len(),
        extra_input,
        min_output,
        nft_recipient,
    )
}

/// Two-sided trade through the fungible token into exactly the named NFTs.
pub fn swap_nfts_for_specific_nfts_through_token(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    trade: &NftsForSpecificNftsTrade,
    extra_input: Amount,
    min_output: Amount,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    through_token(
        router,
        ctx,
        &trade.sell_legs,
        specific_selections(&trade.buy_legs),
        trade.buy_legs.len(),
        extra_input,
        min_output,
        nft_recipient,
    )
}

// ===== Shared Phases =====

fn any_selections(legs: &[AnyNftBuyLeg]) -> impl Iterator<Item = (&AccountId, BuySelection<'_>)> {
    legs.iter().map(|leg| {
        (
            &leg.pool,
            BuySelection::Any {
                quantity: leg.quantity,
            },
        )
    })
}

fn specific_selections(
    legs: &[SpecificNftsLeg],
) -> impl Iterator<Item = (&AccountId, BuySelection<'_>)> {
    legs.iter().map(|leg| {
        (
            &leg.pool,
            BuySelection::Specific {
                nft_ids: &leg.nft_ids,
            },
        )
    })
}

/// Value buy phase: quote each leg for the exact payment to forward, then
/// execute with the remaining balance as the hard cap.
fn value_buys<'l>(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: impl Iterator<Item = (&'l AccountId, BuySelection<'l>)>,
    attached: Amount,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    let mut remaining = attached;
    for (pool, selection) in legs {
        let quote = buy_leg::quote_buy(ctx, pool, &selection)?;
        let cost = buy_leg::execute_value_buy(
            router,
            ctx,
            pool,
            &selection,
            quote.amount,
            remaining,
            nft_recipient,
        )?;
        remaining = debit(remaining, cost, "value buy leg")?;
    }
    Ok(remaining)
}

/// Token buy phase: no prior quotes - each pool pulls exactly its cost,
/// capped at the remaining declared budget.
fn token_buys<'l>(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: impl Iterator<Item = (&'l AccountId, BuySelection<'l>)>,
    input_budget: Amount,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    let mut remaining = input_budget;
    for (pool, selection) in legs {
        let cost =
            buy_leg::execute_token_buy(router, ctx, pool, &selection, remaining, nft_recipient)?;
        remaining = debit(remaining, cost, "token buy leg")?;
    }
    Ok(remaining)
}

/// Sell phase with per-leg minimum 0; the aggregate bound is the caller's
/// only slippage protection on strict paths.
fn sells(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[SpecificNftsLeg],
    proceeds_recipient: &AccountId,
) -> Result<Amount> {
    let mut output: Amount = 0;
    for leg in legs {
        let proceeds =
            sell_leg::execute_sell(router, ctx, &leg.pool, &leg.nft_ids, 0, proceeds_recipient)?;
        output = credit(output, proceeds, "sell leg proceeds")?;
    }
    Ok(output)
}

fn through_value<'l>(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    sell_legs: &[SpecificNftsLeg],
    buy_legs: impl Iterator<Item = (&'l AccountId, BuySelection<'l>)>,
    buy_leg_count: usize,
    attached: Amount,
    min_output: Amount,
    refund_to: &AccountId,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    ctx.ledger.transfer_value(&ctx.caller, router, attached)?;
    info!(
        sell_legs = sell_legs.len(),
        buy_legs = buy_leg_count,
        attached,
        min_output,
        "strict two-sided trade through value"
    );
    // Native proceeds are custodied at the router so the buy phase can
    // spend them.
    let proceeds = sells(router, ctx, sell_legs, router)?;
    let funded = credit(proceeds, attached, "two-sided funding")?;
    let budget = funded
        .checked_sub(min_output)
        .ok_or(RouterError::SlippageViolation {
            realized: funded,
            minimum: min_output,
        })?;
    let leftover = value_buys(router, ctx, buy_legs, budget, nft_recipient)?;
    let output = credit(leftover, min_output, "two-sided output")?;
    refund_value(router, ctx, refund_to, output)?;
    Ok(output)
}

fn through_token<'l>(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    sell_legs: &[SpecificNftsLeg],
    buy_legs: impl Iterator<Item = (&'l AccountId, BuySelection<'l>)>,
    buy_leg_count: usize,
    extra_input: Amount,
    min_output: Amount,
    nft_recipient: &AccountId,
) -> Result<Amount> {
    info!(
        sell_legs = sell_legs.len(),
        buy_legs = buy_leg_count,
        extra_input,
        min_output,
        "strict two-sided trade through token"
    );
    // Token proceeds go straight to the original caller; pull-based
    // payment makes routing them through the router unnecessary.
    let caller = ctx.caller;
    let proceeds = sells(router, ctx, sell_legs, &caller)?;
    let funded = credit(proceeds, extra_input, "two-sided funding")?;
    let budget = funded
        .checked_sub(min_output)
        .ok_or(RouterError::SlippageViolation {
            realized: funded,
            minimum: min_output,
        })?;
    let leftover = token_buys(router, ctx, buy_legs, budget, nft_recipient)?;
    credit(leftover, min_output, "two-sided output")
}

/// Return unspent native value in router custody to the designated
/// recipient.
pub(crate) fn refund_value(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    refund_to: &AccountId,
    amount: Amount,
) -> Result<()> {
    if amount > 0 {
        ctx.ledger.transfer_value(router, refund_to, amount)?;
    }
    Ok(())
}
