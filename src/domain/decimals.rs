//! Native decimal places of an asset.

use crate::error::AmmError;

/// Largest supported number of decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places an asset uses natively.
///
/// The engine works in raw units; `Decimals` only matters when converting
/// human-readable quantities (for example `50` units of a 6-decimals asset)
/// into the raw amounts the pool sees.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::Decimals;
///
/// let d = Decimals::new(6).expect("valid");
/// assert_eq!(d.scale_up(50), 50_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimals(u8);

impl Decimals {
    /// No decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a validated value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] above 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Whole units to raw units; cannot overflow since `u64::MAX * 10^18 < u128::MAX`.
    #[must_use]
    pub const fn scale_up(&self, whole: u64) -> u128 {
        (whole as u128) * self.factor()
    }

    /// Raw units to whole units, truncating the fractional part.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result does not fit in `u64`.
    pub const fn scale_down(&self, raw: u128) -> Result<u64, AmmError> {
        let whole = raw / self.factor();
        if whole > u64::MAX as u128 {
            return Err(AmmError::Overflow("scale_down result exceeds u64"));
        }
        Ok(whole as u64)
    }

    /// `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rejects_more_than_eighteen() {
        let Err(e) = Decimals::new(19) else {
            panic!("expected Err");
        };
        assert_eq!(e, AmmError::InvalidPrecision("decimals must be 0..=18"));
    }

    #[test]
    fn scale_up_twelve_decimals() {
        let Ok(d) = Decimals::new(12) else {
            panic!("expected Ok");
        };
        assert_eq!(d.scale_up(100), 100_000_000_000_000);
    }

    #[test]
    fn scale_down_truncates() {
        let Ok(d) = Decimals::new(6) else {
            panic!("expected Ok");
        };
        assert_eq!(d.scale_down(1_999_999), Ok(1));
        assert_eq!(Decimals::ZERO.scale_down(42), Ok(42));
    }

    #[test]
    fn factor() {
        assert_eq!(Decimals::MAX.factor(), 1_000_000_000_000_000_000);
        assert_eq!(Decimals::ZERO.factor(), 1);
    }
}
