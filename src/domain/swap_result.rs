//! Outcome of a swap or a swap quote.

use core::fmt;

use super::{Amount, Asset, BinId, Price};
use crate::error::AmmError;

/// Amounts exchanged by a swap, or that a quote predicts.
///
/// Exactly one of the inputs and the opposite output are non-zero for a
/// non-empty result.  `fee` is included in the input and stays in the
/// bins that absorbed it.  An executed swap takes the whole pre-funded
/// input; the part its walk did not need is reported as `surplus`, also
/// included in the input, and stays in the last bin touched.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::{Amount, Asset, BinId, SwapResult};
///
/// let r = SwapResult::new(Asset::Token1, Amount::new(1_003), Amount::new(1_000))
///     .with_fee(Amount::new(3))
///     .with_walk(1, BinId::ZERO, true);
/// assert_eq!(r.amount1_in(), Amount::new(1_003));
/// assert_eq!(r.amount0_out(), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapResult {
    input: Asset,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    surplus: Amount,
    bins_crossed: u32,
    last_id: BinId,
    filled: bool,
}

impl SwapResult {
    /// A result paying `amount_in` of `input` for `amount_out` of the other asset.
    pub const fn new(input: Asset, amount_in: Amount, amount_out: Amount) -> Self {
        Self {
            input,
            amount_in,
            amount_out,
            fee: Amount::ZERO,
            surplus: Amount::ZERO,
            bins_crossed: 0,
            last_id: BinId::ZERO,
            filled: false,
        }
    }

    /// Sets the fee portion of the input.
    pub const fn with_fee(mut self, fee: Amount) -> Self {
        self.fee = fee;
        self
    }

    /// Sets the part of the input beyond what the walk consumed.
    pub const fn with_surplus(mut self, surplus: Amount) -> Self {
        self.surplus = surplus;
        self
    }

    /// Records the walk: bins consumed, the last bin touched and whether the
    /// request was satisfied in full.
    pub const fn with_walk(mut self, bins_crossed: u32, last_id: BinId, filled: bool) -> Self {
        self.bins_crossed = bins_crossed;
        self.last_id = last_id;
        self.filled = filled;
        self
    }

    /// The asset paid in.
    #[must_use]
    pub const fn input_asset(&self) -> Asset {
        self.input
    }

    /// Total input, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Total output.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Asset-0 input (zero when asset 1 was paid in).
    pub const fn amount0_in(&self) -> Amount {
        self.side(Asset::Token0, self.amount_in, self.amount_out).0
    }

    /// Asset-1 input.
    pub const fn amount1_in(&self) -> Amount {
        self.side(Asset::Token1, self.amount_in, self.amount_out).0
    }

    /// Asset-0 output.
    pub const fn amount0_out(&self) -> Amount {
        self.side(Asset::Token0, self.amount_in, self.amount_out).1
    }

    /// Asset-1 output.
    pub const fn amount1_out(&self) -> Amount {
        self.side(Asset::Token1, self.amount_in, self.amount_out).1
    }

    /// Fee paid, in the input asset.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Pre-funded input beyond the walk's cost, in the input asset.
    /// Always zero for quotes.
    pub const fn surplus(&self) -> Amount {
        self.surplus
    }

    /// Number of bins that supplied output.
    #[must_use]
    pub const fn bins_crossed(&self) -> u32 {
        self.bins_crossed
    }

    /// The last bin touched; becomes the active bin after a swap.
    #[must_use]
    pub const fn last_id(&self) -> BinId {
        self.last_id
    }

    /// `false` when a partial fill stopped at the price limit or ran out
    /// of liquidity.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.filled
    }

    /// Average execution price in asset 1 per asset 0, fee included.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] when the asset-0 leg is zero.
    pub fn effective_price(&self) -> crate::error::Result<Price> {
        let (amount0, amount1) = match self.input {
            Asset::Token0 => (self.amount_in, self.amount_out),
            Asset::Token1 => (self.amount_out, self.amount_in),
        };
        if amount0.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        Price::from_ratio(amount1.get(), amount0.get())
    }

    /// `(in, out)` amounts of `asset`.
    const fn side(&self, asset: Asset, amount_in: Amount, amount_out: Amount) -> (Amount, Amount) {
        if self.input as u8 == asset as u8 {
            (amount_in, Amount::ZERO)
        } else {
            (Amount::ZERO, amount_out)
        }
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult(in={} {}, out={} {}, fee={}, bins={})",
            self.amount_in,
            self.input,
            self.amount_out,
            self.input.other(),
            self.fee,
            self.bins_crossed
        )
    }
}
