//! Basis-point percentages.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::mul_div_u128;

/// 100% expressed in basis points.
pub(crate) const BPS_DENOMINATOR: u32 = 10_000;

/// A percentage in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Any `u32` can be stored; [`complement`](Self::complement) rejects
/// values above 100%.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::{Amount, BasisPoints, Rounding};
///
/// let fee = BasisPoints::new(30);
/// assert_eq!(fee.complement().map(|c| c.get()), Some(9_970));
/// assert_eq!(fee.apply(Amount::new(1_000_000), Rounding::Down), Ok(Amount::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Wraps a raw basis-point value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// `10_000 - self`, or `None` above 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match BPS_DENOMINATOR.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result does not fit an [`Amount`].
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        mul_div_u128(
            amount.get(),
            u128::from(self.0),
            u128::from(BPS_DENOMINATOR),
            rounding,
        )
        .map(Amount::new)
        .ok_or(AmmError::Overflow("basis points apply overflow"))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn complement() {
        assert_eq!(BasisPoints::new(30).complement(), Some(BasisPoints::new(9_970)));
        assert_eq!(BasisPoints::new(10_001).complement(), None);
    }

    #[test]
    fn apply_rounds_in_requested_direction() {
        let one_bp = BasisPoints::new(1);
        let Ok(down) = one_bp.apply(Amount::new(1), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = one_bp.apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::ZERO);
        assert_eq!(up, Amount::new(1));
    }

    #[test]
    fn apply_does_not_overflow_on_max_amount() {
        let Ok(all) = BasisPoints::MAX_PERCENT.apply(Amount::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(all, Amount::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(30).to_string(), "30bp");
    }
}
