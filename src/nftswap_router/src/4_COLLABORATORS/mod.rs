//! External collaborator interfaces - pools, registry, transfer primitives
//! Everything the router consumes but deliberately does not implement

pub mod ledger;
pub mod pool;
pub mod registry;

pub use ledger::AssetLedger;
pub use pool::{BuySelection, Pool, PoolCall, PoolDirectory, Quote};
pub use registry::Registry;

use crate::types::{AccountId, Timestamp};

/// Everything one routed call executes against.
///
/// Collaborators are injected per call and live exactly as long as the
/// call's own stack frame. Nothing here is shared or global, so a
/// reentrant invocation (a pool calling back into the gateway mid-leg)
/// cannot observe or corrupt another call's accumulated balance.
pub struct CallContext<'a> {
    /// The original trade-initiating caller: pull source for payments and
    /// items, default recipient of fungible proceeds.
    pub caller: AccountId,
    /// Host-supplied current time; the router never reads a clock itself.
    pub now: Timestamp,
    /// Resolves caller-supplied pool references. References are trusted as
    /// supplied; only the transfer gateway consults the registry.
    pub pools: &'a mut dyn PoolDirectory,
    /// The transfer primitives for value, token, and items.
    pub ledger: &'a mut dyn AssetLedger,
    /// Attests pool registration and kind for the transfer gateway.
    pub registry: &'a dyn Registry,
}
