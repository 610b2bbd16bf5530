//! In-process collaborators for exercising the router in tests
//!
//! `TestWorld` plays the host: it owns the mock ledger, registry, and pool
//! directory, and its `atomic` helper implements the host-side
//! transactional boundary - a failed strict call restores the world, the
//! rollback an on-chain execution environment provides for free.

use std::collections::{BTreeMap, BTreeSet};

use crate::_4_COLLABORATORS::{
    AssetLedger, BuySelection, CallContext, Pool, PoolCall, PoolDirectory, Quote, Registry,
};
use crate::infrastructure::errors::{CurveError, Result, TransferError};
use crate::types::{AccountId, Amount, NftId, PoolKind, Timestamp};

// ===== Ledger =====

/// Balance/ownership/allowance-enforcing transfer primitives.
#[derive(Debug, Clone, Default)]
pub struct TestLedger {
    value: BTreeMap<AccountId, Amount>,
    fungible: BTreeMap<AccountId, Amount>,
    allowances: BTreeMap<(AccountId, AccountId), Amount>,
    nft_owners: BTreeMap<NftId, AccountId>,
    operators: BTreeSet<(AccountId, AccountId)>,
}

impl TestLedger {
    pub fn credit_value(&mut self, account: AccountId, amount: Amount) {
        *self.value.entry(account).or_default() += amount;
    }

    pub fn credit_fungible(&mut self, account: AccountId, amount: Amount) {
        *self.fungible.entry(account).or_default() += amount;
    }

    pub fn mint_nft(&mut self, owner: AccountId, nft_id: NftId) {
        self.nft_owners.insert(nft_id, owner);
    }

    pub fn approve_fungible(&mut self, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.insert((owner, spender), amount);
    }

    pub fn approve_operator(&mut self, owner: AccountId, operator: AccountId) {
        self.operators.insert((owner, operator));
    }

    pub fn value_of(&self, account: &AccountId) -> Amount {
        self.value.get(account).copied().unwrap_or(0)
    }

    pub fn fungible_of(&self, account: &AccountId) -> Amount {
        self.fungible.get(account).copied().unwrap_or(0)
    }

    pub fn allowance_of(&self, owner: &AccountId, spender: &AccountId) -> Amount {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    pub fn owner_of(&self, nft_id: NftId) -> Option<AccountId> {
        self.nft_owners.get(&nft_id).copied()
    }

    fn move_balance(
        balances: &mut BTreeMap<AccountId, Amount>,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> std::result::Result<(), TransferError> {
        let available = balances.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(TransferError::InsufficientBalance {
                account: *from,
                required: amount,
                available,
            });
        }
        *balances.entry(*from).or_default() -= amount;
        *balances.entry(*to).or_default() += amount;
        Ok(())
    }
}

impl AssetLedger for TestLedger {
    fn transfer_value(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> std::result::Result<(), TransferError> {
        Self::move_balance(&mut self.value, from, to, amount)
    }

    fn transfer_fungible(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> std::result::Result<(), TransferError> {
        Self::move_balance(&mut self.fungible, from, to, amount)
    }

    fn pull_fungible(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> std::result::Result<(), TransferError> {
        let approved = self.allowance_of(from, spender);
        if approved < amount {
            return Err(TransferError::InsufficientAllowance {
                owner: *from,
                spender: *spender,
                required: amount,
                approved,
            });
        }
        Self::move_balance(&mut self.fungible, from, to, amount)?;
        self.allowances.insert((*from, *spender), approved - amount);
        Ok(())
    }

    fn transfer_nft(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        nft_id: NftId,
    ) -> std::result::Result<(), TransferError> {
        if self.owner_of(nft_id) != Some(*from) {
            return Err(TransferError::NotOwner {
                account: *from,
                nft_id,
            });
        }
        self.nft_owners.insert(nft_id, *to);
        Ok(())
    }

    fn pull_nft(
        &mut self,
        operator: &AccountId,
        from: &AccountId,
        to: &AccountId,
        nft_id: NftId,
    ) -> std::result::Result<(), TransferError> {
        if self.owner_of(nft_id) != Some(*from) {
            return Err(TransferError::NotOwner {
                account: *from,
                nft_id,
            });
        }
        if !self.operators.contains(&(*from, *operator)) {
            return Err(TransferError::NotApproved {
                owner: *from,
                operator: *operator,
            });
        }
        self.nft_owners.insert(nft_id, *to);
        Ok(())
    }
}

// ===== Registry =====

#[derive(Debug, Clone, Default)]
pub struct TestRegistry {
    authorized: BTreeSet<(AccountId, PoolKind)>,
}

impl TestRegistry {
    pub fn register(&mut self, pool: AccountId, kind: PoolKind) {
        self.authorized.insert((pool, kind));
    }
}

impl Registry for TestRegistry {
    fn is_authorized_pool(&self, pool: &AccountId, kind: PoolKind) -> bool {
        self.authorized.contains(&(*pool, kind))
    }
}

// ===== Pool =====

/// Linear-curve pool: the i-th item bought in one leg costs
/// `spot + i * delta` (0-based), so a single-item buy costs exactly the
/// spot price and the next buy quotes `spot + delta`. Selling mirrors
/// downward, price first.
#[derive(Debug, Clone)]
pub struct MockPool {
    pub account: AccountId,
    pub kind: PoolKind,
    pub spot_price: Amount,
    pub delta: Amount,
    pub fee_bps: u16,
    pub inventory: Vec<NftId>,
    /// Forces every quote to fail with this pricing error.
    pub quote_error: Option<CurveError>,
    /// Reports a cost this much higher than actually charged - a
    /// contract-breaking pool, for bookkeeping-corruption tests.
    pub overreport_cost: Amount,
}

impl MockPool {
    pub fn value(account: AccountId, spot_price: Amount, delta: Amount) -> Self {
        MockPool {
            account,
            kind: PoolKind::Value,
            spot_price,
            delta,
            fee_bps: 0,
            inventory: Vec::new(),
            quote_error: None,
            overreport_cost: 0,
        }
    }

    pub fn token(account: AccountId, spot_price: Amount, delta: Amount) -> Self {
        MockPool {
            kind: PoolKind::Token,
            ..Self::value(account, spot_price, delta)
        }
    }

    pub fn with_inventory(mut self, nft_ids: impl IntoIterator<Item = NftId>) -> Self {
        self.inventory = nft_ids.into_iter().collect();
        self
    }

    pub fn with_fee_bps(mut self, fee_bps: u16) -> Self {
        self.fee_bps = fee_bps;
        self
    }

    pub fn with_quote_error(mut self, error: CurveError) -> Self {
        self.quote_error = Some(error);
        self
    }

    pub fn with_overreported_cost(mut self, extra: Amount) -> Self {
        self.overreport_cost = extra;
        self
    }

    fn checked_count(&self, selection: &BuySelection<'_>) -> std::result::Result<u128, CurveError> {
        match selection {
            BuySelection::Any { quantity } => {
                if *quantity == 0 || *quantity as usize > self.inventory.len() {
                    return Err(CurveError::InvalidQuantity {
                        requested: *quantity as u64,
                        available: self.inventory.len() as u64,
                    });
                }
                Ok(*quantity as u128)
            }
            BuySelection::Specific { nft_ids } => {
                if nft_ids.is_empty() {
                    return Err(CurveError::InvalidQuantity {
                        requested: 0,
                        available: self.inventory.len() as u64,
                    });
                }
                for id in *nft_ids {
                    if !self.inventory.contains(id) {
                        return Err(CurveError::ItemUnavailable(*id));
                    }
                }
                Ok(nft_ids.len() as u128)
            }
        }
    }

    fn fee_on(&self, base: Amount) -> std::result::Result<Amount, CurveError> {
        base.checked_mul(self.fee_bps as Amount)
            .map(|scaled| scaled / 10_000)
            .ok_or(CurveError::SpotPriceOverflow)
    }
}

impl Pool for MockPool {
    fn quote_buy(&self, selection: &BuySelection<'_>) -> std::result::Result<Quote, CurveError> {
        if let Some(error) = self.quote_error {
            return Err(error);
        }
        let n = self.checked_count(selection)?;
        // base = n*spot + delta*(0 + 1 + ... + n-1)
        let ramp = self
            .delta
            .checked_mul(n * (n - 1) / 2)
            .ok_or(CurveError::SpotPriceOverflow)?;
        let base = n
            .checked_mul(self.spot_price)
            .and_then(|flat| flat.checked_add(ramp))
            .ok_or(CurveError::SpotPriceOverflow)?;
        let fee = self.fee_on(base)?;
        let amount = base.checked_add(fee).ok_or(CurveError::SpotPriceOverflow)?;
        let new_spot_price = self
            .spot_price
            .checked_add(self.delta.checked_mul(n).ok_or(CurveError::SpotPriceOverflow)?)
            .ok_or(CurveError::SpotPriceOverflow)?;
        Ok(Quote {
            new_spot_price,
            amount,
            fee,
        })
    }

    fn quote_sell(&self, nft_ids: &[NftId]) -> std::result::Result<Quote, CurveError> {
        if let Some(error) = self.quote_error {
            return Err(error);
        }
        if nft_ids.is_empty() {
            return Err(CurveError::InvalidQuantity {
                requested: 0,
                available: 0,
            });
        }
        let mut price = self.spot_price;
        let mut base: Amount = 0;
        for _ in nft_ids {
            price = price.saturating_sub(self.delta);
            base += price;
        }
        let fee = self.fee_on(base)?;
        Ok(Quote {
            new_spot_price: price,
            amount: base - fee,
            fee,
        })
    }

    fn execute_buy(
        &mut self,
        call: &mut PoolCall<'_>,
        selection: &BuySelection<'_>,
        max_input: Amount,
        recipient: &AccountId,
    ) -> Result<Amount> {
        let quote = self.quote_buy(selection)?;
        if quote.amount > max_input {
            return Err(CurveError::InputCapExceeded {
                required: quote.amount,
                cap: max_input,
            }
            .into());
        }
        let pool_account = self.account;
        if call.pull_payment {
            let payer = call.original_caller;
            call.pull_fungible(&payer, &pool_account, quote.amount)?;
        } else if call.forwarded_value < quote.amount {
            return Err(CurveError::InputCapExceeded {
                required: quote.amount,
                cap: call.forwarded_value,
            }
            .into());
        }
        let delivered: Vec<NftId> = match selection {
            BuySelection::Any { quantity } => {
                self.inventory.drain(..*quantity as usize).collect()
            }
            BuySelection::Specific { nft_ids } => {
                for id in *nft_ids {
                    if let Some(held) = self.inventory.iter().position(|held| held == id) {
                        self.inventory.swap_remove(held);
                    }
                }
                nft_ids.to_vec()
            }
        };
        for id in &delivered {
            call.ledger.transfer_nft(&pool_account, recipient, *id)?;
        }
        self.spot_price = quote.new_spot_price;
        Ok(quote.amount + self.overreport_cost)
    }

    fn execute_sell(
        &mut self,
        call: &mut PoolCall<'_>,
        nft_ids: &[NftId],
        min_output: Amount,
        recipient: &AccountId,
    ) -> Result<Amount> {
        let quote = self.quote_sell(nft_ids)?;
        if quote.amount < min_output {
            return Err(CurveError::OutputBelowMinimum {
                offered: quote.amount,
                minimum: min_output,
            }
            .into());
        }
        let pool_account = self.account;
        let seller = call.original_caller;
        // Items are authorized and pulled one by one from the caller
        for id in nft_ids {
            call.pull_nft(&seller, &pool_account, *id)?;
            self.inventory.push(*id);
        }
        match self.kind {
            PoolKind::Value => call.ledger.transfer_value(&pool_account, recipient, quote.amount)?,
            PoolKind::Token => {
                call.ledger.transfer_fungible(&pool_account, recipient, quote.amount)?
            }
        }
        self.spot_price = quote.new_spot_price;
        Ok(quote.amount)
    }
}

// ===== Directory =====

#[derive(Debug, Clone, Default)]
pub struct TestPools {
    pools: BTreeMap<AccountId, MockPool>,
}

impl TestPools {
    pub fn insert(&mut self, pool: MockPool) {
        self.pools.insert(pool.account, pool);
    }
}

impl PoolDirectory for TestPools {
    fn pool_mut(&mut self, id: &AccountId) -> Option<&mut dyn Pool> {
        self.pools.get_mut(id).map(|pool| pool as &mut dyn Pool)
    }
}

// ===== World =====

/// The host: collaborators plus the transactional boundary.
#[derive(Debug, Clone, Default)]
pub struct TestWorld {
    pub now: Timestamp,
    pub ledger: TestLedger,
    pub registry: TestRegistry,
    pub pools: TestPools,
}

impl TestWorld {
    pub fn ctx(&mut self, caller: AccountId) -> CallContext<'_> {
        CallContext {
            caller,
            now: self.now,
            pools: &mut self.pools,
            ledger: &mut self.ledger,
            registry: &self.registry,
        }
    }

    /// Host-side transactional boundary: a call that fails leaves no
    /// effect, as the source chain's rollback guaranteed.
    pub fn atomic<T>(&mut self, f: impl FnOnce(&mut TestWorld) -> Result<T>) -> Result<T> {
        let checkpoint = self.clone();
        let result = f(self);
        if result.is_err() {
            *self = checkpoint;
        }
        result
    }

    /// Register a pool and seed ledger ownership of its inventory.
    pub fn add_pool(&mut self, pool: MockPool) {
        self.registry.register(pool.account, pool.kind);
        self.add_unregistered_pool(pool);
    }

    /// A pool the registry does not know - gateway pulls will fail.
    pub fn add_unregistered_pool(&mut self, pool: MockPool) {
        for id in &pool.inventory {
            self.ledger.mint_nft(pool.account, *id);
        }
        self.pools.insert(pool);
    }
}
