//! Liquidity provision and pool inspection.

use crate::domain::{Address, Amount, Bin, BinId, BurnResult, GlobalState, MintResult, Shares};
use crate::error::AmmError;

/// Provider-facing operations of a bin pool.
///
/// Deposits are pulled from funds already transferred into custody;
/// withdrawals are pushed to a recipient through custody.  Ownership of
/// liquidity is tracked per bin by an external
/// [`ShareLedger`](crate::traits::ShareLedger).
pub trait LiquidityPool {
    /// Deposits `amounts0[i]` / `amounts1[i]` into bin `start_id + i` and
    /// issues shares to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] for empty or mismatched arrays, deposits
    ///   exceeding unaccounted custody funds, or a non-zero deposit that
    ///   would mint zero shares.
    /// - [`AmmError::PriceRangeExceeded`] if a target bin is not priceable.
    fn mint(
        &mut self,
        start_id: BinId,
        amounts0: &[Amount],
        amounts1: &[Amount],
        recipient: Address,
    ) -> Result<MintResult, AmmError>;

    /// Retires `shares[i]` of bin `ids[i]` held by `owner` and pays the
    /// proportional reserves to `recipient`, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] for empty or mismatched arrays.
    /// - [`AmmError::UnauthorizedRedeem`] if `owner` holds fewer shares
    ///   than requested for some bin.
    fn burn(
        &mut self,
        owner: Address,
        ids: &[BinId],
        shares: &[Shares],
        recipient: Address,
    ) -> Result<BurnResult, AmmError>;

    /// Reserves and price of bin `id`; untouched bins report zero reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PriceRangeExceeded`] if `id` is not priceable.
    fn get_bin(&self, id: BinId) -> Result<Bin, AmmError>;

    /// Aggregate reserves and the active bin.
    #[must_use]
    fn global(&self) -> GlobalState;
}
