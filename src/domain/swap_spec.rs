//! What a swap asks for.

use core::fmt;

use super::{Amount, Asset};
use crate::error::AmmError;

/// Direction in which a swap walks the bin ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WalkDirection {
    /// Towards lower ids and prices.
    Down = 0,
    /// Towards higher ids and prices.
    Up = 1,
}

impl fmt::Display for WalkDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "Down"),
            Self::Up => write!(f, "Up"),
        }
    }
}

/// The fixed side of a swap: an exact output or an exact input of one asset.
///
/// # Invariants
///
/// The amount is always non-zero.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::{Amount, Asset, SwapSpec, WalkDirection};
///
/// let spec = SwapSpec::from_outputs(Amount::new(1_000), Amount::ZERO).expect("one side");
/// assert_eq!(spec.output_asset(), Asset::Token0);
/// assert_eq!(spec.direction(), WalkDirection::Down);
///
/// assert!(SwapSpec::from_outputs(Amount::new(1), Amount::new(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapSpec {
    /// The caller sells exactly `amount` of `asset`.
    ExactIn {
        /// The asset being sold.
        asset: Asset,
        /// Fixed input (non-zero).
        amount: Amount,
    },
    /// The caller buys exactly `amount` of `asset`.
    ExactOut {
        /// The asset being bought.
        asset: Asset,
        /// Fixed output (non-zero).
        amount: Amount,
    },
}

impl SwapSpec {
    /// Exact-output spec from the `(amount0_out, amount1_out)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] unless exactly one amount is non-zero.
    pub const fn from_outputs(amount0_out: Amount, amount1_out: Amount) -> crate::error::Result<Self> {
        match pick_one(amount0_out, amount1_out) {
            Some((asset, amount)) => Ok(Self::ExactOut { asset, amount }),
            None => Err(AmmError::InvalidInput(
                "exactly one output amount must be non-zero",
            )),
        }
    }

    /// Exact-input spec from the `(amount0_in, amount1_in)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] unless exactly one amount is non-zero.
    pub const fn from_inputs(amount0_in: Amount, amount1_in: Amount) -> crate::error::Result<Self> {
        match pick_one(amount0_in, amount1_in) {
            Some((asset, amount)) => Ok(Self::ExactIn { asset, amount }),
            None => Err(AmmError::InvalidInput(
                "exactly one input amount must be non-zero",
            )),
        }
    }

    /// The fixed amount.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::ExactIn { amount, .. } | Self::ExactOut { amount, .. } => *amount,
        }
    }

    /// The asset paid out by the pool.
    #[must_use]
    pub const fn output_asset(&self) -> Asset {
        match self {
            Self::ExactIn { asset, .. } => asset.other(),
            Self::ExactOut { asset, .. } => *asset,
        }
    }

    /// The asset paid into the pool.
    #[must_use]
    pub const fn input_asset(&self) -> Asset {
        self.output_asset().other()
    }

    /// Buying asset 0 walks down the curve, buying asset 1 walks up.
    #[must_use]
    pub const fn direction(&self) -> WalkDirection {
        match self.output_asset() {
            Asset::Token0 => WalkDirection::Down,
            Asset::Token1 => WalkDirection::Up,
        }
    }

    /// Returns `true` for [`SwapSpec::ExactIn`].
    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn { .. })
    }
}

const fn pick_one(amount0: Amount, amount1: Amount) -> Option<(Asset, Amount)> {
    match (amount0.is_zero(), amount1.is_zero()) {
        (false, true) => Some((Asset::Token0, amount0)),
        (true, false) => Some((Asset::Token1, amount1)),
        _ => None,
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn { asset, amount } => write!(f, "ExactIn({amount} {asset})"),
            Self::ExactOut { asset, amount } => write!(f, "ExactOut({amount} {asset})"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_output() {
        assert!(SwapSpec::from_outputs(Amount::ZERO, Amount::ZERO).is_err());
        let Err(AmmError::InvalidInput(_)) = SwapSpec::from_outputs(Amount::new(1), Amount::new(2))
        else {
            panic!("expected InvalidInput");
        };
        let Ok(spec) = SwapSpec::from_outputs(Amount::ZERO, Amount::new(5)) else {
            panic!("expected Ok");
        };
        assert_eq!(spec.output_asset(), Asset::Token1);
        assert_eq!(spec.input_asset(), Asset::Token0);
        assert_eq!(spec.amount(), Amount::new(5));
    }

    #[test]
    fn directions() {
        let (Ok(buy0), Ok(sell0)) = (
            SwapSpec::from_outputs(Amount::new(1), Amount::ZERO),
            SwapSpec::from_inputs(Amount::new(1), Amount::ZERO),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(buy0.direction(), WalkDirection::Down);
        // selling asset 0 buys asset 1
        assert_eq!(sell0.direction(), WalkDirection::Up);
        assert!(sell0.is_exact_in());
        assert!(!buy0.is_exact_in());
    }

    #[test]
    fn display() {
        let Ok(spec) = SwapSpec::from_inputs(Amount::ZERO, Amount::new(7)) else {
            panic!("expected Ok");
        };
        assert_eq!(spec.to_string(), "ExactIn(7 token1)");
    }
}
