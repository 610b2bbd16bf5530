//! Pure running-balance arithmetic - no I/O, deterministic
//! A failed debit is bookkeeping corruption, never clamped or retried

use crate::infrastructure::errors::{Result, RouterError};
use crate::types::Amount;

/// Debit `amount` from `balance`.
///
/// Fails with `ArithmeticUnderflow` when the debit would drive the balance
/// negative - a leg consumed more than the budget it was handed, which
/// means a collaborator broke its contract. Fatal on every path, robust
/// entries included.
pub fn debit(balance: Amount, amount: Amount, operation: &'static str) -> Result<Amount> {
    balance
        .checked_sub(amount)
        .ok_or(RouterError::ArithmeticUnderflow {
            operation,
            balance,
            debit: amount,
        })
}

/// Credit `amount` to `balance`, failing with `ArithmeticOverflow` at the
/// numeric limit.
pub fn credit(balance: Amount, amount: Amount, operation: &'static str) -> Result<Amount> {
    balance
        .checked_add(amount)
        .ok_or(RouterError::ArithmeticOverflow { operation })
}
