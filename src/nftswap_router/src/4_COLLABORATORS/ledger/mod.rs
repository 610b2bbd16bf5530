//! Low-level transfer primitives for the value unit, the fungible token,
//! and the non-fungible items

use crate::infrastructure::errors::TransferError;
use crate::types::{AccountId, Amount, NftId};

/// Asset movement primitive.
///
/// Balance, ownership, and allowance correctness are enforced here, at the
/// collaborator level - the router adds no checks of its own beyond the
/// transfer gateway's registry gate. Pull variants move assets on the
/// authority of an allowance or operator approval previously granted to
/// the spender (the router, for gateway pulls).
pub trait AssetLedger {
    /// Move native value out of `from`'s balance.
    fn transfer_value(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> std::result::Result<(), TransferError>;

    /// Move fungible tokens out of `from`'s balance.
    fn transfer_fungible(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> std::result::Result<(), TransferError>;

    /// Move fungible tokens from `from` on the authority of `spender`'s
    /// allowance, consuming it.
    fn pull_fungible(
        &mut self,
        spender: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> std::result::Result<(), TransferError>;

    /// Move one item out of `from`'s holdings.
    fn transfer_nft(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        nft_id: NftId,
    ) -> std::result::Result<(), TransferError>;

    /// Move one item from `from` on the authority of `operator`'s approval.
    fn pull_nft(
        &mut self,
        operator: &AccountId,
        from: &AccountId,
        to: &AccountId,
        nft_id: NftId,
    ) -> std::result::Result<(), TransferError>;
}
