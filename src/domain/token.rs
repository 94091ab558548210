//! Token identity.

use super::{Address, Amount, Decimals};
use crate::error::AmmError;

/// A token: its address plus its native decimal places.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::{Address, Decimals, Token};
///
/// let usdc = Token::new(Address::repeat_byte(1), Decimals::new(6).expect("valid"));
/// assert_eq!(usdc.units(50).get(), 50_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    address: Address,
    decimals: Decimals,
}

impl Token {
    /// Creates a token from already-validated parts.
    #[must_use]
    pub const fn new(address: Address, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Token address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Native decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// `whole` units of this token as a raw [`Amount`].
    pub const fn units(&self, whole: u64) -> Amount {
        Amount::new(self.decimals.scale_up(whole))
    }

    /// Raw amount back to whole units, truncating.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result does not fit in `u64`.
    pub const fn whole_units(&self, raw: Amount) -> Result<u64, AmmError> {
        self.decimals.scale_down(raw.get())
    }
}
