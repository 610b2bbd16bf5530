//! Per-leg outcomes and robust batch reports

use serde::{Deserialize, Serialize};

use crate::infrastructure::errors::CurveError;

use super::Amount;

/// Why a robust leg was skipped instead of executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The fresh pre-screen quote reported a pricing error.
    Quote(CurveError),
    /// Quoted cost exceeds the caller's per-leg cap.
    CostAboveCap { quoted: Amount, max_cost: Amount },
    /// Quoted proceeds fall short of the caller's per-leg floor.
    ProceedsBelowFloor { quoted: Amount, min_proceeds: Amount },
    /// The supplied pool reference did not resolve.
    UnknownPool,
}

/// Result of one leg inside a robust batch. A skipped leg has zero effect
/// and contributes nothing to the batch total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegOutcome {
    Executed { amount: Amount },
    Skipped { reason: SkipReason },
}

impl LegOutcome {
    pub fn is_executed(&self) -> bool {
        matches!(self, LegOutcome::Executed { .. })
    }
}

/// Outcome of a robust buy batch: the remaining input budget plus one
/// outcome per supplied leg, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobustBuyReport {
    pub remaining: Amount,
    pub legs: Vec<LegOutcome>,
}

/// Outcome of a robust sell batch: total realized proceeds plus one
/// outcome per supplied leg, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobustSellReport {
    pub output: Amount,
    pub legs: Vec<LegOutcome>,
}

/// Outcome of a combined robust buy-and-sell call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobustTradeReport {
    pub remaining: Amount,
    pub output: Amount,
    pub buy_legs: Vec<LegOutcome>,
    pub sell_legs: Vec<LegOutcome>,
}
