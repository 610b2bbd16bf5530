//! Pool registry capability

use crate::types::{AccountId, PoolKind};

/// Attests which addresses are registered pools, and of what kind.
///
/// Modeled as an injected, synchronously queried capability rather than
/// ambient state. The transfer gateway trusts it fully: a positive answer
/// is the only authorization a pulling pool needs, and it is checked
/// lazily, at the moment a transfer is pulled.
pub trait Registry {
    fn is_authorized_pool(&self, pool: &AccountId, kind: PoolKind) -> bool;
}
