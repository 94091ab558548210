//! Swap fee charged on the input side.

use core::fmt;

use super::basis_points::BPS_DENOMINATOR;
use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;
use crate::math::mul_div_u128;

/// The proportional swap fee, taken from the input asset and retained in
/// the bin that absorbed it.
///
/// For a fee `f` (as a fraction) the pool charges `net / (1 - f)` for an
/// input whose fee-free cost is `net`, so the fee is exactly `f` of what
/// the trader pays.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::{Amount, FeeTier};
///
/// let fee = FeeTier::TIER_0_30_PERCENT;
/// let gross = fee.gross_up(Amount::new(997_000)).expect("fits");
/// assert_eq!(gross, Amount::new(1_000_000));
/// assert_eq!(fee.net_of_fee(gross), Ok(Amount::new(997_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.05%, for tightly correlated pairs.
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30%, the reference fee for volatile pairs.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00%, for exotic pairs.
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Wraps an arbitrary basis-point value; validated by pool config.
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// The underlying basis points.
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// `true` when the fee is strictly below 100%.
    #[must_use]
    pub const fn is_chargeable(&self) -> bool {
        self.0.get() < BPS_DENOMINATOR
    }

    /// Inflates a fee-free input to the fee-inclusive amount owed to the
    /// pool: `ceil(net * 10_000 / (10_000 - fee))`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] when the fee is 100% or more.
    /// - [`AmmError::Overflow`] when the result does not fit an [`Amount`].
    pub fn gross_up(&self, net: Amount) -> crate::error::Result<Amount> {
        let keep = self
            .0
            .complement()
            .filter(|c| c.get() > 0)
            .ok_or(AmmError::InvalidFee("fee must be below 100%"))?;
        mul_div_u128(
            net.get(),
            u128::from(BPS_DENOMINATOR),
            u128::from(keep.get()),
            Rounding::Up,
        )
        .map(Amount::new)
        .ok_or(AmmError::Overflow("fee gross-up overflow"))
    }

    /// The part of a fee-inclusive input that is actually exchanged:
    /// `floor(gross * (10_000 - fee) / 10_000)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] when the fee exceeds 100%.
    pub fn net_of_fee(&self, gross: Amount) -> crate::error::Result<Amount> {
        let keep = self
            .0
            .complement()
            .ok_or(AmmError::InvalidFee("fee must not exceed 100%"))?;
        keep.apply(gross, Rounding::Down)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_0_30_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
