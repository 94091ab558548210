//! Which side of the pair a quantity refers to.

use core::fmt;

/// One of the two pooled assets.
///
/// Prices are quoted as units of [`Asset::Token1`] per unit of
/// [`Asset::Token0`], so a higher bin id makes asset 0 more expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Asset {
    /// Asset "0", the base of the price quote.
    Token0,
    /// Asset "1", the quote currency.
    Token1,
}

impl Asset {
    /// The counterpart asset.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::Token0 => Self::Token1,
            Self::Token1 => Self::Token0,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token0 => write!(f, "token0"),
            Self::Token1 => write!(f, "token1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_an_involution() {
        assert_eq!(Asset::Token0.other(), Asset::Token1);
        assert_eq!(Asset::Token1.other().other(), Asset::Token1);
    }
}
