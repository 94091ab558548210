//! Pool-wide aggregates.

use core::fmt;

use super::{Amount, Asset, BinId};

/// Aggregate reserves and the active bin.
///
/// `reserve0`/`reserve1` always equal the sum of the per-bin reserves;
/// `current_id` is where the next swap walk starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalState {
    /// Total asset-0 reserve.
    pub reserve0: Amount,
    /// Total asset-1 reserve.
    pub reserve1: Amount,
    /// Active bin.
    pub current_id: BinId,
}

impl GlobalState {
    /// Empty state positioned at `current_id`.
    #[must_use]
    pub const fn at(current_id: BinId) -> Self {
        Self {
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
            current_id,
        }
    }

    /// Total reserve of `asset`.
    pub const fn reserve(&self, asset: Asset) -> Amount {
        match asset {
            Asset::Token0 => self.reserve0,
            Asset::Token1 => self.reserve1,
        }
    }
}

impl fmt::Display for GlobalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Global(reserve0={}, reserve1={}, current={})",
            self.reserve0, self.reserve1, self.current_id
        )
    }
}
