//! NFT-AMM Batch Swap Router
//!
//! Exchanges a fungible value unit (native value or a fungible token) for
//! sets of non-fungible items, or vice versa, by composing trades against
//! many independently priced liquidity pools inside one atomic call.
//!
//! Architecture:
//! 1_BATCH_ORCHESTRATION - public swap compositions, running balance, slippage policy
//! 2_LEG_EXECUTION - one-pool buy/sell leg executors
//! 3_TRANSFER_GATEWAY - pool-only pull transfers (the trust boundary)
//! 4_COLLABORATORS - pool, registry, and transfer-primitive interfaces
//! 5_INFRASTRUCTURE - errors, call guards, checked arithmetic
//!
//! The router is stateless between calls. Collaborators arrive per call in
//! a [`CallContext`]; the host environment owns call-level atomicity - a
//! strict entry returning `Err` obligates the embedding to discard every
//! partial effect of that call, the way an on-chain execution environment
//! rolls back a reverted transaction.

// Import numbered zones with explicit paths
#[path = "1_BATCH_ORCHESTRATION/mod.rs"]
mod batch_orchestration_1;
use batch_orchestration_1 as _1_BATCH_ORCHESTRATION;

#[path = "2_LEG_EXECUTION/mod.rs"]
mod leg_execution_2;
use leg_execution_2 as _2_LEG_EXECUTION;

#[path = "3_TRANSFER_GATEWAY/mod.rs"]
pub mod transfer_gateway_3;
pub use transfer_gateway_3 as gateway;
use transfer_gateway_3 as _3_TRANSFER_GATEWAY;

#[path = "4_COLLABORATORS/mod.rs"]
mod collaborators_4;
use collaborators_4 as _4_COLLABORATORS;

#[path = "5_INFRASTRUCTURE/mod.rs"]
mod infrastructure_5;
use infrastructure_5 as infrastructure;

mod types;

#[cfg(test)]
mod testkit;

pub use _4_COLLABORATORS::{
    AssetLedger, BuySelection, CallContext, Pool, PoolCall, PoolDirectory, Quote, Registry,
};
pub use infrastructure::{check_deadline, CurveError, Result, RouterError, TransferError};
pub use types::legs::{
    AnyNftBuyLeg, CappedAnyNftBuyLeg, CappedSpecificNftsLeg, FlooredSpecificNftsLeg,
    NftsForAnyNftsTrade, NftsForSpecificNftsTrade, RobustNftTradeParams, SpecificNftsLeg,
};
pub use types::outcome::{
    LegOutcome, RobustBuyReport, RobustSellReport, RobustTradeReport, SkipReason,
};
pub use types::{AccountId, Amount, NftId, PoolKind, Timestamp};

/// The batch-swap router.
///
/// Holds nothing but its own custody account: attached native value and
/// native sell proceeds pass through it within a single call and never
/// survive the call's return. All batch accounting lives in the entry's
/// stack frame, so reentrant pool callbacks cannot reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
    account: AccountId,
}

impl Router {
    pub const fn new(account: AccountId) -> Self {
        Router { account }
    }

    /// The router's custody account.
    pub fn account(&self) -> AccountId {
        self.account
    }

    // ===== STRICT ENTRIES =====

    /// Swap native value for any NFTs across pools.
    ///
    /// Claims `attached` from the caller, buys leg by leg, and refunds the
    /// unspent remainder to `refund_to`.
    ///
    /// ## Returns
    /// The unspent amount, `attached - Σ realized cost`.
    pub fn swap_value_for_any_nfts(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[AnyNftBuyLeg],
        attached: Amount,
        refund_to: &AccountId,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::strict::swap_value_for_any_nfts(
            &self.account,
            ctx,
            legs,
            attached,
            refund_to,
            nft_recipient,
        )
    }

    /// Swap native value for exactly the named NFTs.
    pub fn swap_value_for_specific_nfts(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[SpecificNftsLeg],
        attached: Amount,
        refund_to: &AccountId,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::strict::swap_value_for_specific_nfts(
            &self.account,
            ctx,
            legs,
            attached,
            refund_to,
            nft_recipient,
        )
    }

    /// Sell one NFT set and buy any NFTs through native value.
    ///
    /// The sell phase routes proceeds through the router; the buy phase
    /// spends `proceeds + attached - min_output` and the returned amount,
    /// refunded to `refund_to`, is provably at least `min_output`.
    pub fn swap_nfts_for_any_nfts_through_value(
        &self,
        ctx: &mut CallContext<'_>,
        trade: &NftsForAnyNftsTrade,
        attached: Amount,
        min_output: Amount,
        refund_to: &AccountId,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::strict::swap_nfts_for_any_nfts_through_value(
            &self.account,
            ctx,
            trade,
            attached,
            min_output,
            refund_to,
            nft_recipient,
        )
    }

    /// Sell one NFT set and buy exactly the named NFTs through native
    /// value.
    pub fn swap_nfts_for_specific_nfts_through_value(
        &self,
        ctx: &mut CallContext<'_>,
        trade: &NftsForSpecificNftsTrade,
        attached: Amount,
        min_output: Amount,
        refund_to: &AccountId,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::strict::swap_nfts_for_specific_nfts_through_value(
            &self.account,
            ctx,
            trade,
            attached,
            min_output,
            refund_to,
            nft_recipient,
        )
    }

    /// Swap fungible tokens for any NFTs. Each pool pulls exactly its
    /// cost through the gateway; nothing is custodied and nothing is
    /// refunded. Returns the unspent part of `input_budget`.
    pub fn swap_token_for_any_nfts(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[AnyNftBuyLeg],
        input_budget: Amount,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::strict::swap_token_for_any_nfts(
            &self.account,
            ctx,
            legs,
            input_budget,
            nft_recipient,
        )
    }

    /// Swap fungible tokens for exactly the named NFTs.
    pub fn swap_token_for_specific_nfts(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[SpecificNftsLeg],
        input_budget: Amount,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::strict::swap_token_for_specific_nfts(
            &self.account,
            ctx,
            legs,
            input_budget,
            nft_recipient,
        )
    }

    /// Sell NFT sets for tokens with one aggregate minimum: the whole call
    /// fails with `SlippageViolation` unless `Σ proceeds >= min_output`,
    /// even when individual legs under- or over-deliver.
    pub fn swap_nfts_for_token(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[SpecificNftsLeg],
        min_output: Amount,
        proceeds_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::strict::swap_nfts_for_token(
            &self.account,
            ctx,
            legs,
            min_output,
            proceeds_recipient,
        )
    }

    /// Sell one NFT set and buy any NFTs through the fungible token.
    /// Sell proceeds go directly to the caller and the buy phase pulls
    /// them back on demand.
    pub fn swap_nfts_for_any_nfts_through_token(
        &self,
        ctx: &mut CallContext<'_>,
        trade: &NftsForAnyNftsTrade,
        extra_input: Amount,
        min_output: Amount,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::strict::swap_nfts_for_any_nfts_through_token(
            &self.account,
            ctx,
            trade,
            extra_input,
            min_output,
            nft_recipient,
        )
    }

    /// Sell one NFT set and buy exactly the named NFTs through the
    /// fungible token.
    pub fn swap_nfts_for_specific_nfts_through_token(
        &self,
        ctx: &mut CallContext<'_>,
        trade: &NftsForSpecificNftsTrade,
        extra_input: Amount,
        min_output: Amount,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<Amount> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::strict::swap_nfts_for_specific_nfts_through_token(
            &self.account,
            ctx,
            trade,
            extra_input,
            min_output,
            nft_recipient,
        )
    }

    // ===== ROBUST ENTRIES =====

    /// Best-effort version of [`Self::swap_value_for_any_nfts`]: each leg
    /// carries its own cost cap and is skipped, not fatal, when a fresh
    /// quote errors or exceeds it.
    pub fn robust_swap_value_for_any_nfts(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[CappedAnyNftBuyLeg],
        attached: Amount,
        refund_to: &AccountId,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<RobustBuyReport> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::robust::robust_swap_value_for_any_nfts(
            &self.account,
            ctx,
            legs,
            attached,
            refund_to,
            nft_recipient,
        )
    }

    /// Best-effort specific-NFT buys with native value.
    pub fn robust_swap_value_for_specific_nfts(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[CappedSpecificNftsLeg],
        attached: Amount,
        refund_to: &AccountId,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<RobustBuyReport> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::robust::robust_swap_value_for_specific_nfts(
            &self.account,
            ctx,
            legs,
            attached,
            refund_to,
            nft_recipient,
        )
    }

    /// Best-effort any-NFT buys with the fungible token.
    pub fn robust_swap_token_for_any_nfts(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[CappedAnyNftBuyLeg],
        input_budget: Amount,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<RobustBuyReport> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::robust::robust_swap_token_for_any_nfts(
            &self.account,
            ctx,
            legs,
            input_budget,
            nft_recipient,
        )
    }

    /// Best-effort specific-NFT buys with the fungible token.
    pub fn robust_swap_token_for_specific_nfts(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[CappedSpecificNftsLeg],
        input_budget: Amount,
        nft_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<RobustBuyReport> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::robust::robust_swap_token_for_specific_nfts(
            &self.account,
            ctx,
            legs,
            input_budget,
            nft_recipient,
        )
    }

    /// Best-effort sells: each leg carries its own proceeds floor and is
    /// skipped, not fatal, when a fresh quote errors or falls under it.
    pub fn robust_swap_nfts_for_token(
        &self,
        ctx: &mut CallContext<'_>,
        legs: &[FlooredSpecificNftsLeg],
        proceeds_recipient: &AccountId,
        deadline: Timestamp,
    ) -> Result<RobustSellReport> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::robust::robust_swap_nfts_for_token(
            &self.account,
            ctx,
            legs,
            proceeds_recipient,
        )
    }

    /// Combined best-effort entry: buy specific NFTs with native value and
    /// sell NFTs for tokens in one call, each side with its own bounds.
    pub fn robust_swap_value_for_specific_nfts_and_nfts_to_token(
        &self,
        ctx: &mut CallContext<'_>,
        trade: &RobustNftTradeParams,
        attached: Amount,
        refund_to: &AccountId,
        deadline: Timestamp,
    ) -> Result<RobustTradeReport> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::robust::robust_swap_value_for_specific_nfts_and_nfts_to_token(
            &self.account,
            ctx,
            trade,
            attached,
            refund_to,
        )
    }

    /// Combined best-effort entry funded with the fungible token.
    pub fn robust_swap_token_for_specific_nfts_and_nfts_to_token(
        &self,
        ctx: &mut CallContext<'_>,
        trade: &RobustNftTradeParams,
        input_budget: Amount,
        deadline: Timestamp,
    ) -> Result<RobustTradeReport> {
        infrastructure::check_deadline(ctx.now, deadline)?;
        _1_BATCH_ORCHESTRATION::robust::robust_swap_token_for_specific_nfts_and_nfts_to_token(
            &self.account,
            ctx,
            trade,
            input_budget,
        )
    }
}
