//! # Robust Batch Orchestration
//!
//! Best-effort compositions. Every leg is screened against a fresh quote
//! and the caller's per-leg bound immediately before it is attempted; a
//! leg that fails screening is skipped with zero effect and the batch
//! continues. A robust call never aborts because of an individual leg's
//! pricing error or bound violation.
//!
//! Only bookkeeping corruption (`ArithmeticUnderflow`) and collaborator
//! failures (`Unauthorized`, `Transfer`) remain fatal - those mean a pool
//! broke a contract the screening cannot vouch for.

use tracing::{info, warn};

use crate::_2_LEG_EXECUTION::{buy_leg, sell_leg};
use crate::_4_COLLABORATORS::{BuySelection, CallContext};
use crate::infrastructure::errors::Result;
use crate::infrastructure::math::{credit, debit};
use crate::types::legs::{
    CappedAnyNftBuyLeg, CappedSpecificNftsLeg, FlooredSpecificNftsLeg, RobustNftTradeParams,
};
use crate::types::outcome::{LegOutcome, RobustBuyReport, RobustSellReport, RobustTradeReport};
use crate::types::{AccountId, Amount};

use super::strict::refund_value;

/// Best-effort value buys: screened legs execute, the rest are skipped,
/// and the remainder is refunded. Never fails on a leg's account.
pub fn robust_swap_value_for_any_nfts(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[CappedAnyNftBuyLeg],
    attached: Amount,
    refund_to: &AccountId,
    nft_recipient: &AccountId,
) -> Result<RobustBuyReport> {
    ctx.ledger.transfer_value(&ctx.caller, router, attached)?;
    info!(legs = legs.len(), attached, "robust value buy batch");
    let report = value_buys(
        router,
        ctx,
        capped_any_selections(legs),
        attached,
        nft_recipient,
    )?;
    refund_value(router, ctx, refund_to, report.remaining)?;
    Ok(report)
}

/// Best-effort value buys of exactly the named NFTs.
pub fn robust_swap_value_for_specific_nfts(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[CappedSpecificNftsLeg],
    attached: Amount,
    refund_to: &AccountId,
    nft_recipient: &AccountId,
) -> Result<RobustBuyReport> {
    ctx.ledger.transfer_value(&ctx.caller, router, attached)?;
    info!(legs = legs.len(), attached, "robust value buy batch (specific)");
    let report = value_buys(
        router,
        ctx,
        capped_specific_selections(legs),
        attached,
        nft_recipient,
    )?;
    refund_value(router, ctx, refund_to, report.remaining)?;
    Ok(report)
}

/// Best-effort token buys: each screened leg pulls exactly its quoted
/// cost; skipped legs pull nothing.
pub fn robust_swap_token_for_any_nfts(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[CappedAnyNftBuyLeg],
    input_budget: Amount,
    nft_recipient: &AccountId,
) -> Result<RobustBuyReport> {
    info!(legs = legs.len(), input_budget, "robust token buy batch");
    token_buys(
        router,
        ctx,
        capped_any_selections(legs),
        input_budget,
        nft_recipient,
    )
}

/// Best-effort token buys of exactly the named NFTs.
pub fn robust_swap_token_for_specific_nfts(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[CappedSpecificNftsLeg],
    input_budget: Amount,
    nft_recipient: &AccountId,
) -> Result<RobustBuyReport> {
    info!(legs = legs.len(), input_budget, "robust token buy batch (specific)");
    token_buys(
        router,
        ctx,
        capped_specific_selections(legs),
        input_budget,
        nft_recipient,
    )
}

/// Best-effort sells: legs quoting under their floor are skipped, the rest
/// execute with per-leg minimum 0 (screening already vouched for them).
pub fn robust_swap_nfts_for_token(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[FlooredSpecificNftsLeg],
    proceeds_recipient: &AccountId,
) -> Result<RobustSellReport> {
    info!(legs = legs.len(), "robust sell batch");
    sells(router, ctx, legs, proceeds_recipient)
}

/// Combined best-effort entry: buy specific NFTs with native value and
/// sell NFTs for tokens in one call.
pub fn robust_swap_value_for_specific_nfts_and_nfts_to_token(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    trade: &RobustNftTradeParams,
    attached: Amount,
    refund_to: &AccountId,
) -> Result<RobustTradeReport> {
    ctx.ledger.transfer_value(&ctx.caller, router, attached)?;
    info!(
        buy_legs = trade.buy_legs.len(),
        sell_legs = trade.sell_legs.len(),
        attached,
        "robust combined trade (value-funded)"
    );
    let buys = value_buys(
        router,
        ctx,
        capped_specific_selections(&trade.buy_legs),
        attached,
        &trade.nft_recipient,
    )?;
    let sell = sells(router, ctx, &trade.sell_legs, &trade.proceeds_recipient)?;
    refund_value(router, ctx, refund_to, buys.remaining)?;
    Ok(RobustTradeReport {
        remaining: buys.remaining,
        output: sell.output,
        buy_legs: buys.legs,
        sell_legs: sell.legs,
    })
}

/// Combined best-effort entry funded with the fungible token.
pub fn robust_swap_token_for_specific_nfts_and_nfts_to_token(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    trade: &RobustNftTradeParams,
    input_budget: Amount,
) -> Result<RobustTradeReport> {
    info!(
        buy_legs = trade.buy_legs.len(),
        sell_legs = trade.sell_legs.len(),
        input_budget,
        "robust combined trade (token-funded)"
    );
    let buys = token_buys(
        router,
        ctx,
        capped_specific_selections(&trade.buy_legs),
        input_budget,
        &trade.nft_recipient,
    )?;
    let sell = sells(router, ctx, &trade.sell_legs, &trade.proceeds_recipient)?;
    Ok(RobustTradeReport {
        remaining: buys.remaining,
        output: sell.output,
        buy_legs: buys.legs,
        sell_legs: sell.legs,
    })
}

// ===== Shared Phases =====

fn capped_any_selections(
    legs: &[CappedAnyNftBuyLeg],
) -> impl Iterator<Item = (&AccountId, BuySelection<'_>, Amount)> {
    legs.iter().map(|capped| {
        (
            &capped.leg.pool,
            BuySelection::Any {
                quantity: capped.leg.quantity,
            },
            capped.max_cost,
        )
    })
}

fn capped_specific_selections(
    legs: &[CappedSpecificNftsLeg],
) -> impl Iterator<Item = (&AccountId, BuySelection<'_>, Amount)> {
    legs.iter().map(|capped| {
        (
            &capped.leg.pool,
            BuySelection::Specific {
                nft_ids: &capped.leg.nft_ids,
            },
            capped.max_cost,
        )
    })
}

/// Robust value buy phase: screen, forward exactly the screened quote,
/// execute with the quote as its own cap.
fn value_buys<'l>(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: impl Iterator<Item = (&'l AccountId, BuySelection<'l>, Amount)>,
    attached: Amount,
    nft_recipient: &AccountId,
) -> Result<RobustBuyReport> {
    let mut remaining = attached;
    let mut outcomes = Vec::new();
    for (pool, selection, max_cost) in legs {
        let quote = match buy_leg::screen_buy(ctx, pool, &selection, max_cost) {
            Ok(quote) => quote,
            Err(reason) => {
                warn!(pool = %pool, ?reason, "value buy leg skipped");
                outcomes.push(LegOutcome::Skipped { reason });
                continue;
            }
        };
        let cost = buy_leg::execute_value_buy(
            router,
            ctx,
            pool,
            &selection,
            quote.amount,
            quote.amount,
            nft_recipient,
        )?;
        remaining = debit(remaining, cost, "robust value buy leg")?;
        outcomes.push(LegOutcome::Executed { amount: cost });
    }
    Ok(RobustBuyReport {
        remaining,
        legs: outcomes,
    })
}

/// Robust token buy phase: screen, then let the pool pull up to the
/// screened quote.
fn token_buys<'l>(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: impl Iterator<Item = (&'l AccountId, BuySelection<'l>, Amount)>,
    input_budget: Amount,
    nft_recipient: &AccountId,
) -> Result<RobustBuyReport> {
    let mut remaining = input_budget;
    let mut outcomes = Vec::new();
    for (pool, selection, max_cost) in legs {
        let quote = match buy_leg::screen_buy(ctx, pool, &selection, max_cost) {
            Ok(quote) => quote,
            Err(reason) => {
                warn!(pool = %pool, ?reason, "token buy leg skipped");
                outcomes.push(LegOutcome::Skipped { reason });
                continue;
            }
        };
        let cost = buy_leg::execute_token_buy(
            router,
            ctx,
            pool,
            &selection,
            quote.amount,
            nft_recipient,
        )?;
        remaining = debit(remaining, cost, "robust token buy leg")?;
        outcomes.push(LegOutcome::Executed { amount: cost });
    }
    Ok(RobustBuyReport {
        remaining,
        legs: outcomes,
    })
}

/// Robust sell phase: screen against each leg's floor, execute survivors.
fn sells(
    router: &AccountId,
    ctx: &mut CallContext<'_>,
    legs: &[FlooredSpecificNftsLeg],
    proceeds_recipient: &AccountId,
) -> Result<RobustSellReport> {
    let mut output: Amount = 0;
    let mut outcomes = Vec::new();
    for floored in legs {
        let leg = &floored.leg;
        if let Err(reason) = sell_leg::screen_sell(ctx, &leg.pool, &leg.nft_ids, floored.min_proceeds)
        {
            warn!(pool = %leg.pool, ?reason, "sell leg skipped");
            outcomes.push(LegOutcome::Skipped { reason });
            continue;
        }
        let proceeds =
            sell_leg::execute_sell(router, ctx, &leg.pool, &leg.nft_ids, 0, proceeds_recipient)?;
        output = credit(output, proceeds, "robust sell leg")?;
        outcomes.push(LegOutcome::Executed { amount: proceeds });
    }
    Ok(RobustSellReport {
        output,
        legs: outcomes,
    })
}
