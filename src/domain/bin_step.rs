//! Relative price distance between adjacent bins.

use core::fmt;

use crate::error::AmmError;

/// Largest supported bin step (1%).
const MAX_BIN_STEP: u16 = 100;

/// The price ratio between consecutive bins, in basis points.
///
/// A bin step of `s` gives `price(id + 1) / price(id) = 1 + s / 10_000`.
/// Supported values are `1..=100`.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::BinStep;
///
/// let step = BinStep::new(2).expect("valid");
/// assert_eq!(step.get(), 2);
/// assert!(BinStep::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinStep(u16);

impl BinStep {
    /// One basis point per bin.
    pub const ONE_BP: Self = Self(1);

    /// Creates a validated bin step.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] outside `1..=100`.
    pub const fn new(value: u16) -> crate::error::Result<Self> {
        if value == 0 || value > MAX_BIN_STEP {
            return Err(AmmError::InvalidConfiguration(
                "bin step must be within 1..=100 basis points",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw basis-point value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl Default for BinStep {
    fn default() -> Self {
        Self::ONE_BP
    }
}

impl fmt::Display for BinStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinStep({}bp)", self.0)
    }
}
