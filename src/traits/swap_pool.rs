//! Swap execution and quoting.
//!
//! [`SwapPool`] covers the trader side of a bin pool:
//!
//! 1. **Execute**: [`SwapPool::swap`] pays out an exact output, charging
//!    input that was pre-funded into custody.
//! 2. **Quote**: [`SwapPool::get_swap_in`] and [`SwapPool::get_swap_out`]
//!    run the same walk without mutating anything.
//!
//! # Fee Invariant
//!
//! The fee is charged on the input side and retained by the bin that
//! absorbed it:
//!
//! ```text
//! net_in   = conversion at the bin price (rounded up)
//! gross_in = ceil(net_in * 10_000 / (10_000 - fee_bps))
//! ```

use crate::domain::{Address, Amount, FeeTier, Price, SwapResult, TokenPair};
use crate::error::AmmError;

/// Trader-facing operations of a pool.
///
/// # Errors
///
/// - [`AmmError::InvalidInput`] unless exactly one amount is non-zero, or
///   when the pre-funded input does not cover the swap.
/// - [`AmmError::InsufficientLiquidity`] when the bins cannot supply the
///   requested output.
/// - [`AmmError::Overflow`] if intermediate arithmetic overflows.
pub trait SwapPool {
    /// Buys exactly `amount0_out` or `amount1_out` (one of them zero) for
    /// `recipient`.
    ///
    /// The input asset must already sit in custody beyond the pool's
    /// accounted reserves.  `price_limit`, when set, bounds the bins the
    /// walk may consume.  Either the whole swap is committed or nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn swap(
        &mut self,
        amount0_out: Amount,
        amount1_out: Amount,
        recipient: Address,
        price_limit: Option<Price>,
    ) -> Result<SwapResult, AmmError>;

    /// Input (fee included) that [`swap`](Self::swap) would charge for the
    /// given output.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap), except that pre-funding is not checked.
    fn get_swap_in(&self, amount0_out: Amount, amount1_out: Amount) -> Result<SwapResult, AmmError>;

    /// Output obtainable for an exact input.  When liquidity runs out the
    /// quote covers what is reachable and reports itself as not filled.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] unless exactly one amount is non-zero.
    /// - [`AmmError::InsufficientLiquidity`] if nothing can be bought.
    fn get_swap_out(&self, amount0_in: Amount, amount1_in: Amount) -> Result<SwapResult, AmmError>;

    /// The pool's assets in price-quote order.
    #[must_use]
    fn token_pair(&self) -> &TokenPair;

    /// The swap fee.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;
}
