//! Bin reserves and the read-only bin view.

use core::fmt;

use super::{Amount, Asset, BinId, Price};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// The two reserves held by one bin.
///
/// Reserves only change through [`credit`](Self::credit) and
/// [`debit`](Self::debit), which never wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinReserves {
    reserve0: Amount,
    reserve1: Amount,
}

impl BinReserves {
    /// Empty reserves.
    pub const EMPTY: Self = Self::new(Amount::ZERO, Amount::ZERO);

    /// Creates reserves from raw amounts.
    #[must_use]
    pub const fn new(reserve0: Amount, reserve1: Amount) -> Self {
        Self { reserve0, reserve1 }
    }

    /// Reserve of asset 0.
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Reserve of asset 1.
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Reserve of `asset`.
    pub const fn of(&self, asset: Asset) -> Amount {
        match asset {
            Asset::Token0 => self.reserve0,
            Asset::Token1 => self.reserve1,
        }
    }

    /// `true` when both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve0.is_zero() && self.reserve1.is_zero()
    }

    /// Adds to both reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if either reserve would overflow.
    pub fn credit(&self, amount0: Amount, amount1: Amount) -> crate::error::Result<Self> {
        Ok(Self {
            reserve0: self.reserve0.safe_add(&amount0)?,
            reserve1: self.reserve1.safe_add(&amount1)?,
        })
    }

    /// Subtracts from both reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientReserve`] if either reserve would go
    /// negative.
    pub fn debit(&self, amount0: Amount, amount1: Amount) -> crate::error::Result<Self> {
        let reserve0 = self
            .reserve0
            .checked_sub(&amount0)
            .ok_or(AmmError::InsufficientReserve("bin reserve0 below debit"))?;
        let reserve1 = self
            .reserve1
            .checked_sub(&amount1)
            .ok_or(AmmError::InsufficientReserve("bin reserve1 below debit"))?;
        Ok(Self { reserve0, reserve1 })
    }
}

/// A bin as reported to callers: its id, reserves and derived price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bin {
    id: BinId,
    reserves: BinReserves,
    price: Price,
}

impl Bin {
    /// Assembles a bin view.
    #[must_use]
    pub const fn new(id: BinId, reserves: BinReserves, price: Price) -> Self {
        Self {
            id,
            reserves,
            price,
        }
    }

    /// The bin id.
    #[must_use]
    pub const fn id(&self) -> BinId {
        self.id
    }

    /// Both reserves.
    #[must_use]
    pub const fn reserves(&self) -> BinReserves {
        self.reserves
    }

    /// Reserve of asset 0.
    pub const fn reserve0(&self) -> Amount {
        self.reserves.reserve0
    }

    /// Reserve of asset 1.
    pub const fn reserve1(&self) -> Amount {
        self.reserves.reserve1
    }

    /// `price(id)`.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(reserve0={}, reserve1={}, {})",
            self.id, self.reserves.reserve0, self.reserves.reserve1, self.price
        )
    }
}
