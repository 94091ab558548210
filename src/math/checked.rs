//! Checked arithmetic for the engine's quantity types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning helpers on
//! [`Amount`] and [`Shares`] into [`AmmError`] results, so that engine code
//! can chain them with `?` and callers learn *which* limit was hit.
//!
//! # Examples
//!
//! ```
//! use liquidity_bins::domain::{Amount, Rounding};
//! use liquidity_bins::math::CheckedArithmetic;
//!
//! // 1000 * 3 / 7 paid out, rounded down
//! let paid = Amount::new(1_000).safe_mul_div(3, 7, Rounding::Down);
//! assert_eq!(paid, Ok(Amount::new(428)));
//! ```

use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;
use crate::math::mul_div_u128;

/// Fallible arithmetic that reports the failing condition.
///
/// Nothing saturates: an out-of-range result is always an error.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] past `u128::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self * numerator / denominator` with a 256-bit intermediate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the quotient exceeds `u128::MAX`.
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, AmmError>;
}

fn scale(value: u128, numerator: u128, denominator: u128, rounding: Rounding) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    mul_div_u128(value, numerator, denominator, rounding)
        .ok_or(AmmError::Overflow("proportional scaling overflow"))
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        scale(self.get(), numerator, denominator, rounding).map(Amount::new)
    }
}

// ---------------------------------------------------------------------------
// Shares
// ---------------------------------------------------------------------------

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }

    #[inline]
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        scale(self.get(), numerator, denominator, rounding).map(Shares::new)
    }
}
