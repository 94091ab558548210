//! Per-bin share quantity.

use core::fmt;

use primitive_types::U256;

/// A quantity of shares in one bin.
///
/// Shares are a fungible claim on a single bin's reserves.  The first mint
/// into an empty bin issues one share per unit of deposited value; later
/// mints preserve the value of an existing share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw share count.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw share count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` when the quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Widens to 256 bits.
    #[must_use]
    pub fn to_u256(&self) -> U256 {
        U256::from(self.0)
    }

    /// Narrows a 256-bit value; `None` if it does not fit in `u128`.
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
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} shares", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_ops() {
        let a = Shares::new(10);
        assert_eq!(a.checked_add(&Shares::new(5)), Some(Shares::new(15)));
        assert_eq!(a.checked_sub(&Shares::new(11)), None);
        assert_eq!(Shares::new(u128::MAX).checked_add(&Shares::new(1)), None);
    }

    #[test]
    fn narrowing_rejects_wide_values() {
        assert_eq!(Shares::from_u256(U256::from(7u8)), Some(Shares::new(7)));
        assert_eq!(Shares::from_u256(U256::MAX), None);
    }

    #[test]
    fn display() {
        assert_eq!(Shares::new(3).to_string(), "3 shares");
        assert!(Shares::ZERO.is_zero());
    }
}
