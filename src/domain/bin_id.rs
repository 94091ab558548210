//! Signed index of a price bin.

use core::fmt;

use crate::error::AmmError;

/// Largest structurally valid bin id magnitude (`2^20 - 1`).
const MAX_ID: i32 = (1 << 20) - 1;

/// Identifier of a discrete price bin.
///
/// Higher ids have higher prices: `price(id) = base^id`.  The structural
/// range is `[-(2^20 - 1), 2^20 - 1]`; whether a given id is actually
/// priceable also depends on the pool's bin step (see
/// [`PriceCurve`](crate::math::PriceCurve)).
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::BinId;
///
/// let id = BinId::new(-10_000).expect("in range");
/// assert_eq!(id.get(), -10_000);
/// assert_eq!(id.checked_add(1).map(|b| b.get()), Some(-9_999));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinId(i32);

impl BinId {
    /// Lowest structurally valid id.
    pub const MIN: Self = Self(-MAX_ID);

    /// Highest structurally valid id.
    pub const MAX: Self = Self(MAX_ID);

    /// The bin whose price is exactly one.
    pub const ZERO: Self = Self(0);

    /// Creates a bin id with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PriceRangeExceeded`] outside `[-(2^20 - 1), 2^20 - 1]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < -MAX_ID || value > MAX_ID {
            return Err(AmmError::PriceRangeExceeded(
                "bin id outside [-(2^20 - 1), 2^20 - 1]",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Absolute distance from bin zero.
    #[must_use]
    pub const fn magnitude(&self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Adds `delta`, returning `None` when the result leaves the valid range.
    #[must_use]
    pub const fn checked_add(&self, delta: i32) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(v) if v >= -MAX_ID && v <= MAX_ID => Some(Self(v)),
            _ => None,
        }
    }

    /// Subtracts `delta`, returning `None` when the result leaves the valid range.
    #[must_use]
    pub const fn checked_sub(&self, delta: i32) -> Option<Self> {
        match self.0.checked_sub(delta) {
            Some(v) if v >= -MAX_ID && v <= MAX_ID => Some(Self(v)),
            _ => None,
        }
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bin({})", self.0)
    }
}
