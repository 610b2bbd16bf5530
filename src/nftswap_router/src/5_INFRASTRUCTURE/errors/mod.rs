//! # Error Taxonomy
//!
//! One crate-level error with nested collaborator errors.
//!
//! ## Failure Classes
//! - `DeadlineExceeded`: precondition failure, checked before any effect
//! - `Pricing`: a pool cannot quote or execute at the requested size -
//!   aborts strict batches, screened out per leg in robust batches
//! - `SlippageViolation`: the aggregate realized amount fails the caller's
//!   bound in a strict entry
//! - `ArithmeticUnderflow`/`ArithmeticOverflow`: a leg's realized amount
//!   breaks the running-balance bookkeeping - fatal everywhere, robust
//!   entries included
//! - `Unauthorized`: the transfer gateway was invoked by a caller the
//!   registry does not attest as a pool of the required kind
//! - `Transfer`: the underlying transfer primitive refused the movement
//!
//! The core performs no retries; a failed strict call is terminal and the
//! host's atomicity contract discards its partial effects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AccountId, Amount, NftId, Timestamp};

pub type Result<T> = std::result::Result<T, RouterError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("deadline exceeded: now {now} is past deadline {deadline}")]
    DeadlineExceeded { now: Timestamp, deadline: Timestamp },

    #[error("pool pricing error: {0}")]
    Pricing(#[from] CurveError),

    #[error("slippage violation: realized {realized} below minimum {minimum}")]
    SlippageViolation { realized: Amount, minimum: Amount },

    #[error("running balance underflow in {operation}: {balance} < {debit}")]
    ArithmeticUnderflow {
        operation: &'static str,
        balance: Amount,
        debit: Amount,
    },

    #[error("balance overflow in {operation}")]
    ArithmeticOverflow { operation: &'static str },

    #[error("unauthorized transfer request: {caller} is not a registered pool of the required kind")]
    Unauthorized { caller: AccountId },

    #[error("asset transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("unknown pool reference {0}")]
    UnknownPool(AccountId),
}

/// Pricing failures reported by a pool's bonding curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CurveError {
    #[error("invalid item quantity {requested} (pool can serve {available})")]
    InvalidQuantity { requested: u64, available: u64 },

    #[error("spot price overflow")]
    SpotPriceOverflow,

    #[error("item {0} not available in pool")]
    ItemUnavailable(NftId),

    #[error("cost {required} exceeds payment cap {cap}")]
    InputCapExceeded { required: Amount, cap: Amount },

    #[error("proceeds {offered} below requested minimum {minimum}")]
    OutputBelowMinimum { offered: Amount, minimum: Amount },
}

/// Failures surfaced by the transfer primitives. Ownership, balance, and
/// allowance rules live in the collaborator; the router only relays them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TransferError {
    #[error("insufficient balance of {account}: need {required}, have {available}")]
    InsufficientBalance {
        account: AccountId,
        required: Amount,
        available: Amount,
    },

    #[error("insufficient allowance for spender {spender} on {owner}: need {required}, approved {approved}")]
    InsufficientAllowance {
        owner: AccountId,
        spender: AccountId,
        required: Amount,
        approved: Amount,
    },

    #[error("account {account} does not own item {nft_id}")]
    NotOwner { account: AccountId, nft_id: NftId },

    #[error("operator {operator} not approved for items of {owner}")]
    NotApproved { owner: AccountId, operator: AccountId },
}
