//! # Pool Collaborator Interface
//!
//! One pool prices and executes one-sided exchanges between the value unit
//! and non-fungible items via its own pricing rule. The router trusts pool
//! references exactly as the caller supplied them; authenticity is only
//! ever checked by the transfer gateway, at the moment a pool pulls.
//!
//! ## Quote vs Execute
//! Quotes are read-only and report the price state the pool would hold
//! after the hypothetical leg. Execution is the only mutation, and its
//! realized amount - never the earlier quote - is what enters the
//! orchestrator's running balance.

use serde::{Deserialize, Serialize};

use crate::infrastructure::errors::{CurveError, Result};
use crate::types::{AccountId, Amount, NftId};

use super::ledger::AssetLedger;
use super::registry::Registry;

/// Read-only price for a hypothetical leg.
///
/// Mirrors the pool quote tuple (error code, updated price state, required
/// payment / expected proceeds, fee info); the error code is the `Err` arm
/// of the quote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Spot price the pool would hold after the leg executes.
    pub new_spot_price: Amount,
    /// Required payment for a buy, expected proceeds for a sell.
    pub amount: Amount,
    /// Portion of `amount` the pool keeps as fee.
    pub fee: Amount,
}

/// Which items a buy leg acquires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuySelection<'a> {
    /// Any `quantity` items, pool's choice.
    Any { quantity: u32 },
    /// Exactly these items.
    Specific { nft_ids: &'a [NftId] },
}

/// One independently priced liquidity pool.
pub trait Pool {
    /// Price a buy without executing it.
    fn quote_buy(&self, selection: &BuySelection<'_>) -> std::result::Result<Quote, CurveError>;

    /// Price a sell without executing it.
    fn quote_sell(&self, nft_ids: &[NftId]) -> std::result::Result<Quote, CurveError>;

    /// Execute a buy, delivering the items to `recipient` and returning the
    /// realized cost. Must fail rather than consume more than `max_input`.
    fn execute_buy(
        &mut self,
        call: &mut PoolCall<'_>,
        selection: &BuySelection<'_>,
        max_input: Amount,
        recipient: &AccountId,
    ) -> Result<Amount>;

    /// Execute a sell, paying the proceeds to `recipient` and returning the
    /// realized amount. Must fail rather than pay less than `min_output`.
    fn execute_sell(
        &mut self,
        call: &mut PoolCall<'_>,
        nft_ids: &[NftId],
        min_output: Amount,
        recipient: &AccountId,
    ) -> Result<Amount>;
}

/// Resolves caller-supplied pool references for the duration of one call.
///
/// The same reference may appear in several legs of one batch; each
/// resolution observes the mutations of the legs before it.
pub trait PoolDirectory {
    fn pool_mut(&mut self, id: &AccountId) -> Option<&mut dyn Pool>;
}

/// What an executing pool sees of the router during one leg.
///
/// Carries the ledger for the pool's own pushes (proceeds, item delivery)
/// and re-enters the router's transfer gateway for pulls from the original
/// caller. The pool identity the gateway authenticates is bound by the
/// router when it invokes the leg; a pool cannot claim another's.
pub struct PoolCall<'a> {
    /// Transfer primitives for the pool's own movements.
    pub ledger: &'a mut dyn AssetLedger,
    /// The caller whose assets may be pulled for this leg.
    pub original_caller: AccountId,
    /// Payment routing: `true` pulls the cost from the original caller
    /// through the gateway, `false` means it was forwarded as native value.
    pub pull_payment: bool,
    /// Native value forwarded with the leg (zero on pull-paid legs).
    pub forwarded_value: Amount,
    registry: &'a dyn Registry,
    router: AccountId,
    pool: AccountId,
}

impl<'a> PoolCall<'a> {
    /// Leg paid by native value already forwarded to the pool.
    pub(crate) fn forwarded(
        ledger: &'a mut dyn AssetLedger,
        registry: &'a dyn Registry,
        router: AccountId,
        pool: AccountId,
        original_caller: AccountId,
        forwarded_value: Amount,
    ) -> Self {
        PoolCall {
            ledger,
            original_caller,
            pull_payment: false,
            forwarded_value,
            registry,
            router,
            pool,
        }
    }

    /// Leg paid by a fungible pull from the original caller.
    pub(crate) fn pulled(
        ledger: &'a mut dyn AssetLedger,
        registry: &'a dyn Registry,
        router: AccountId,
        pool: AccountId,
        original_caller: AccountId,
    ) -> Self {
        PoolCall {
            ledger,
            original_caller,
            pull_payment: true,
            forwarded_value: 0,
            registry,
            router,
            pool,
        }
    }

    /// Gateway re-entry: pull fungible tokens `from` → `to` on the pool's
    /// behalf. Subject to the gateway's registry check.
    pub fn pull_fungible(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<()> {
        crate::_3_TRANSFER_GATEWAY::pull_fungible(
            self.registry,
            self.ledger,
            &self.router,
            &self.pool,
            from,
            to,
            amount,
        )
    }

    /// Gateway re-entry: pull one item `from` → `to` on the pool's behalf.
    pub fn pull_nft(&mut self, from: &AccountId, to: &AccountId, nft_id: NftId) -> Result<()> {
        crate::_3_TRANSFER_GATEWAY::pull_nft(
            self.registry,
            self.ledger,
            &self.router,
            &self.pool,
            from,
            to,
            nft_id,
        )
    }
}
