//! Caller-supplied leg and trade descriptions
//!
//! All of these are call-local: built from caller input at the start of an
//! entry, consumed during the batch, and discarded at return.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, NftId};

/// Acquire `quantity` arbitrary items from one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnyNftBuyLeg {
    pub pool: AccountId,
    pub quantity: u32,
}

/// Acquire or dispose of exactly these items at one pool.
///
/// The same shape serves buy and sell legs; which side it is on is decided
/// by the entry that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificNftsLeg {
    pub pool: AccountId,
    pub nft_ids: Vec<NftId>,
}

/// Robust buy leg: executed only while a fresh quote stays at or under
/// `max_cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CappedAnyNftBuyLeg {
    pub leg: AnyNftBuyLeg,
    pub max_cost: Amount,
}

/// Robust specific-items buy leg with the caller's per-leg cost cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CappedSpecificNftsLeg {
    pub leg: SpecificNftsLeg,
    pub max_cost: Amount,
}

/// Robust sell leg: executed only while a fresh quote stays at or above
/// `min_proceeds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlooredSpecificNftsLeg {
    pub leg: SpecificNftsLeg,
    pub min_proceeds: Amount,
}

/// Dispose of one NFT set, then spend the proceeds (plus any extra input)
/// acquiring arbitrary items from other pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftsForAnyNftsTrade {
    pub sell_legs: Vec<SpecificNftsLeg>,
    pub buy_legs: Vec<AnyNftBuyLeg>,
}

/// Dispose of one NFT set, then acquire exactly the named items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftsForSpecificNftsTrade {
    pub sell_legs: Vec<SpecificNftsLeg>,
    pub buy_legs: Vec<SpecificNftsLeg>,
}

/// Parameters of the combined robust entries: buy specific NFTs and sell
/// NFTs in one call, each side screened against its own per-leg bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobustNftTradeParams {
    pub buy_legs: Vec<CappedSpecificNftsLeg>,
    pub sell_legs: Vec<FlooredSpecificNftsLeg>,
    /// Receives every NFT acquired by the buy side.
    pub nft_recipient: AccountId,
    /// Receives the sell side's proceeds.
    pub proceeds_recipient: AccountId,
}
