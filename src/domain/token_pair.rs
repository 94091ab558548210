//! The two assets of a pool, in price-quote order.

use super::{Asset, Token};
use crate::error::AmmError;

/// The pool's asset 0 and asset 1.
///
/// Unlike a canonically sorted pair, the caller's order is kept: it decides
/// which asset is the base of the price quote (asset 0) and which is the
/// quote currency (asset 1).
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::{Address, Asset, Decimals, Token, TokenPair};
///
/// let t6 = Token::new(Address::repeat_byte(2), Decimals::new(6).expect("valid"));
/// let t12 = Token::new(Address::repeat_byte(1), Decimals::new(12).expect("valid"));
/// let pair = TokenPair::new(t6, t12).expect("distinct");
/// assert_eq!(pair.token(Asset::Token0), t6);
/// assert_eq!(pair.token(Asset::Token1), t12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token0: Token,
    token1: Token,
}

impl TokenPair {
    /// Creates a pair from two tokens with distinct addresses.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both addresses are equal.
    pub fn new(token0: Token, token1: Token) -> Result<Self, AmmError> {
        if token0.address() == token1.address() {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        Ok(Self { token0, token1 })
    }

    /// The token on the given side.
    #[must_use]
    pub const fn token(&self, asset: Asset) -> Token {
        match asset {
            Asset::Token0 => self.token0,
            Asset::Token1 => self.token1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Address, Decimals};

    fn tok(byte: u8, dec: u8) -> Token {
        let Ok(d) = Decimals::new(dec) else {
            panic!("invalid decimals in test: {dec}");
        };
        Token::new(Address::repeat_byte(byte), d)
    }

    #[test]
    fn keeps_caller_order() {
        let Ok(pair) = TokenPair::new(tok(2, 6), tok(1, 12)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.token(Asset::Token0), tok(2, 6));
        assert_eq!(pair.token(Asset::Token1), tok(1, 12));
    }

    #[test]
    fn rejects_same_address() {
        let Err(e) = TokenPair::new(tok(1, 6), tok(1, 12)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            AmmError::InvalidToken("token pair requires two distinct addresses")
        );
    }
}
