//! Token quantity in the engine's internal unit.

use core::fmt;

use primitive_types::U256;

/// A non-negative token quantity in the engine's internal unit.
///
/// The engine never interprets decimals: the custody layer is responsible
/// for normalizing each asset's native precision before amounts reach the
/// pool.  Every `u128` value is a valid amount.
///
/// Arithmetic is checked and returns `None` instead of panicking.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::Amount;
///
/// let reserve = Amount::new(100_000_000);
/// let out = Amount::new(1_000_000);
/// assert_eq!(reserve.checked_sub(&out), Some(Amount::new(99_000_000)));
/// assert_eq!(out.min(reserve), out);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw `u128` quantity.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw quantity.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for the zero amount.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Widens the amount to a 256-bit integer for fixed-point math.
    #[must_use]
    pub fn to_u256(&self) -> U256 {
        U256::from(self.0)
    }

    /// Narrows a 256-bit value back to an amount.
    ///
    /// Returns `None` when the value does not fit in `u128`.
    #[must_use]
    pub fn from_u256(value: U256) -> Option<Self> {
        if value > U256::from(u128::MAX) {
            return None;
        }
        Some(Self(value.low_u128()))
    }

    /// Checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Saturating subtraction, clamped at zero.
    pub const fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
