//! Fixed-point bin price.

use core::fmt;

use primitive_types::U256;

use super::{Amount, Asset, Rounding};
use crate::error::AmmError;
use crate::math::{mul_shift, shift_div, SCALE_OFFSET};

/// Units of asset 1 per unit of asset 0, as an unsigned Q128.128 number.
///
/// The raw value is `price * 2^128` held in a 256-bit integer, which keeps
/// at least 64 fractional bits of precision for every price the
/// [`PriceCurve`](crate::math::PriceCurve) can produce.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::{Amount, Asset, Price, Rounding};
///
/// let two = Price::from_ratio(2, 1).expect("non-zero denominator");
/// let out = two.quote(Amount::new(10), Asset::Token0, Rounding::Down).expect("fits");
/// assert_eq!(out, Amount::new(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(U256);

impl Price {
    /// A price of exactly one.
    pub const ONE: Self = Self(U256([0, 0, 1, 0]));

    /// The zero price; never produced by the curve.
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// Wraps a raw Q128.128 value.
    #[must_use]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// The raw Q128.128 value.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// `true` for the zero price.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Builds `numerator / denominator`, rounded down.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn from_ratio(numerator: u128, denominator: u128) -> crate::error::Result<Self> {
        if denominator == 0 {
            return Err(AmmError::DivisionByZero);
        }
        shift_div(
            U256::from(numerator),
            SCALE_OFFSET,
            U256::from(denominator),
            Rounding::Down,
        )
        .map(Self)
        .ok_or(AmmError::Overflow("price ratio overflow"))
    }

    /// Converts `amount` of asset `from` into the other asset at this price.
    ///
    /// Asset 0 is multiplied by the price, asset 1 is divided by it.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] for a zero price when converting asset 1.
    /// - [`AmmError::Overflow`] when the result does not fit an [`Amount`].
    pub fn quote(&self, amount: Amount, from: Asset, rounding: Rounding) -> crate::error::Result<Amount> {
        let wide = self.quote_wide(amount, from, rounding)?;
        Amount::from_u256(wide).ok_or(AmmError::Overflow("price conversion exceeds amount range"))
    }

    /// Like [`quote`](Self::quote) but keeps the 256-bit result.
    ///
    /// # Errors
    ///
    /// Same as [`quote`](Self::quote), except that only results wider than
    /// 256 bits overflow.
    pub fn quote_wide(&self, amount: Amount, from: Asset, rounding: Rounding) -> crate::error::Result<U256> {
        match from {
            Asset::Token0 => mul_shift(amount.to_u256(), self.0, SCALE_OFFSET, rounding)
                .ok_or(AmmError::Overflow("price multiply overflow")),
            Asset::Token1 => {
                if self.is_zero() {
                    return Err(AmmError::DivisionByZero);
                }
                shift_div(amount.to_u256(), SCALE_OFFSET, self.0, rounding)
                    .ok_or(AmmError::Overflow("price divide overflow"))
            }
        }
    }

    /// Approximate decimal value, for display and tolerance checks only.
    #[must_use]
    pub fn to_f64_lossy(&self) -> f64 {
        let U256(limbs) = self.0;
        let two_64 = 18_446_744_073_709_551_616.0_f64;
        let mut acc = 0.0_f64;
        for limb in limbs.iter().rev() {
            acc = acc * two_64 + *limb as f64;
        }
        acc / (two_64 * two_64)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({:.12})", self.to_f64_lossy())
    }
}
