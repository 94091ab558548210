//! Asset custody.

use crate::domain::{Address, Amount, Asset};
use crate::error::AmmError;

/// Holds the pool's assets and pays out on its instruction.
///
/// Amounts are in the engine's internal unit; converting native token
/// precision is the custody layer's job.  Callers fund the pool by
/// transferring into custody *before* invoking `mint` or `swap`; the pool
/// treats `pool_balance(asset) - accounted reserve` as the available input.
pub trait Custody {
    /// Total of `asset` held on behalf of the pool, accounted or not.
    fn pool_balance(&self, asset: Asset) -> Amount;

    /// Pays `amount` of `asset` from the pool to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientReserve`] if the pool holds less.
    fn transfer_out(&mut self, asset: Asset, recipient: &Address, amount: Amount) -> Result<(), AmmError>;
}

impl<T: Custody + ?Sized> Custody for &mut T {
    fn pool_balance(&self, asset: Asset) -> Amount {
        (**self).pool_balance(asset)
    }

    fn transfer_out(&mut self, asset: Asset, recipient: &Address, amount: Amount) -> Result<(), AmmError> {
        (**self).transfer_out(asset, recipient, amount)
    }
}
