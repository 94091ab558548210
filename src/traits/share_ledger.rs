//! Per-bin share ownership.

use crate::domain::{Address, BinId, Shares};
use crate::error::AmmError;

/// External record of who owns how many shares of each bin.
///
/// The pool only mints on deposit and burns on withdrawal; `transfer`
/// exists for holders and is never called by the engine.
pub trait ShareLedger {
    /// Shares of bin `id` held by `holder`.
    fn balance_of(&self, holder: &Address, id: BinId) -> Shares;

    /// All outstanding shares of bin `id`.
    fn total_supply(&self, id: BinId) -> Shares;

    /// Issues `shares` of bin `id` to `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if a balance or the supply overflows.
    fn mint(&mut self, holder: &Address, id: BinId, shares: Shares) -> Result<(), AmmError>;

    /// Retires `shares` of bin `id` from `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnauthorizedRedeem`] if `holder` owns fewer
    /// shares.
    fn burn(&mut self, holder: &Address, id: BinId, shares: Shares) -> Result<(), AmmError>;

    /// Moves `shares` of bin `id` between holders.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::UnauthorizedRedeem`] if `from` owns fewer shares.
    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        id: BinId,
        shares: Shares,
    ) -> Result<(), AmmError>;
}

impl<T: ShareLedger + ?Sized> ShareLedger for &mut T {
    fn balance_of(&self, holder: &Address, id: BinId) -> Shares {
        (**self).balance_of(holder, id)
    }

    fn total_supply(&self, id: BinId) -> Shares {
        (**self).total_supply(id)
    }

    fn mint(&mut self, holder: &Address, id: BinId, shares: Shares) -> Result<(), AmmError> {
        (**self).mint(holder, id, shares)
    }

    fn burn(&mut self, holder: &Address, id: BinId, shares: Shares) -> Result<(), AmmError> {
        (**self).burn(holder, id, shares)
    }

    fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        id: BinId,
        shares: Shares,
    ) -> Result<(), AmmError> {
        (**self).transfer(from, to, id, shares)
    }
}
