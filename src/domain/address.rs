//! Opaque 32-byte identity for tokens and accounts.

use core::fmt;

/// A chain-agnostic 32-byte address.
///
/// Used both for token identities and for liquidity holders / swap
/// recipients.  All byte strings are valid, so construction is infallible.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::Address;
///
/// let alice = Address::repeat_byte(7);
/// assert_ne!(alice, Address::repeat_byte(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; 32]);

impl Address {
    /// Convenience constructor repeating one byte, handy for fixtures.
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self([byte; 32])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")
    }
}
