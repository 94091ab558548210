//! Sparse per-bin reserve storage.
//!
//! Only bins that have ever been credited exist in the map; every other id
//! reads as empty.  The map is ordered, so a swap walk jumps straight to
//! the next funded bin instead of stepping through empty ids.

use std::collections::BTreeMap;

use crate::domain::{Amount, Asset, BinId, BinReserves, WalkDirection};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Entries of selected bins, captured before a commit so it can be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BinSnapshot(Vec<(BinId, Option<BinReserves>)>);

/// Reserves of every materialized bin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinLedger {
    bins: BTreeMap<BinId, BinReserves>,
}

impl BinLedger {
    /// An empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves of `id`; zero for untouched bins.
    #[must_use]
    pub fn reserves(&self, id: BinId) -> BinReserves {
        self.bins.get(&id).copied().unwrap_or(BinReserves::EMPTY)
    }

    /// Number of bins that have ever been funded, including ones that
    /// have since been drained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// `true` when no bin has ever been funded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// All materialized bins in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (BinId, BinReserves)> + '_ {
        self.bins.iter().map(|(id, r)| (*id, *r))
    }

    /// Bins holding `asset`, starting at `start` (inclusive) and moving in
    /// `direction`.
    pub fn walk(
        &self,
        start: BinId,
        direction: WalkDirection,
        asset: Asset,
    ) -> impl Iterator<Item = (BinId, BinReserves)> + '_ {
        let (up, down) = match direction {
            WalkDirection::Up => (Some(self.bins.range(start..)), None),
            WalkDirection::Down => (None, Some(self.bins.range(..=start).rev())),
        };
        up.into_iter()
            .flatten()
            .chain(down.into_iter().flatten())
            .filter(move |(_, r)| !r.of(asset).is_zero())
            .map(|(id, r)| (*id, *r))
    }

    /// Sum of all reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if a sum exceeds `u128::MAX`.
    pub fn totals(&self) -> Result<(Amount, Amount), AmmError> {
        self.bins
            .values()
            .try_fold((Amount::ZERO, Amount::ZERO), |(t0, t1), r| {
                Ok((t0.safe_add(&r.reserve0())?, t1.safe_add(&r.reserve1())?))
            })
    }

    /// Adds to bin `id`, materializing it on first non-zero credit.
    pub(crate) fn credit(&mut self, id: BinId, amount0: Amount, amount1: Amount) -> Result<(), AmmError> {
        if amount0.is_zero() && amount1.is_zero() {
            return Ok(());
        }
        let updated = self.reserves(id).credit(amount0, amount1)?;
        self.bins.insert(id, updated);
        Ok(())
    }

    /// Captures the entries of `ids`, including the absence of untouched ones.
    pub(crate) fn snapshot(&self, ids: impl IntoIterator<Item = BinId>) -> BinSnapshot {
        BinSnapshot(
            ids.into_iter()
                .map(|id| (id, self.bins.get(&id).copied()))
                .collect(),
        )
    }

    /// Puts back every entry captured by `snapshot`.  Bins it did not
    /// capture are left alone.
    pub(crate) fn rollback(&mut self, snapshot: BinSnapshot) {
        for (id, saved) in snapshot.0.into_iter().rev() {
            match saved {
                Some(reserves) => {
                    self.bins.insert(id, reserves);
                }
                None => {
                    self.bins.remove(&id);
                }
            }
        }
    }

    /// Subtracts from bin `id`.  Drained bins stay in the map at zero.
    pub(crate) fn debit(&mut self, id: BinId, amount0: Amount, amount1: Amount) -> Result<(), AmmError> {
        if amount0.is_zero() && amount1.is_zero() {
            return Ok(());
        }
        let updated = self.reserves(id).debit(amount0, amount1)?;
        self.bins.insert(id, updated);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn id(v: i32) -> BinId {
        let Ok(b) = BinId::new(v) else {
            panic!("valid id expected");
        };
        b
    }

    fn ledger(entries: &[(i32, u128, u128)]) -> BinLedger {
        let mut l = BinLedger::new();
        for &(i, a0, a1) in entries {
            let Ok(()) = l.credit(id(i), Amount::new(a0), Amount::new(a1)) else {
                panic!("credit failed");
            };
        }
        l
    }

    // -- reads ----------------------------------------------------------------

    #[test]
    fn untouched_bin_is_empty() {
        let l = BinLedger::new();
        assert_eq!(l.reserves(id(42)), BinReserves::EMPTY);
        assert!(l.is_empty());
    }

    #[test]
    fn zero_credit_does_not_materialize() {
        let l = ledger(&[(5, 0, 0)]);
        assert_eq!(l.len(), 0);
    }

    #[test]
    fn totals_sum_all_bins() {
        let l = ledger(&[(-1, 10, 0), (0, 5, 5), (3, 0, 7)]);
        assert_eq!(l.totals(), Ok((Amount::new(15), Amount::new(12))));
    }

    // -- mutation -------------------------------------------------------------

    #[test]
    fn drained_bin_remains_materialized() {
        let mut l = ledger(&[(1, 10, 0)]);
        let Ok(()) = l.debit(id(1), Amount::new(10), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(l.len(), 1);
        assert!(l.reserves(id(1)).is_empty());
    }

    #[test]
    fn overdraft_fails_without_change() {
        let mut l = ledger(&[(1, 10, 0)]);
        let before = l.clone();
        let Err(AmmError::InsufficientReserve(_)) = l.debit(id(1), Amount::new(11), Amount::ZERO) else {
            panic!("expected InsufficientReserve");
        };
        assert_eq!(l, before);
    }

    #[test]
    fn rollback_restores_only_captured_bins() {
        let mut l = ledger(&[(1, 10, 0), (2, 0, 5)]);
        let saved = l.snapshot([id(1), id(7), id(1)]);
        let (Ok(()), Ok(()), Ok(())) = (
            l.debit(id(1), Amount::new(4), Amount::ZERO),
            l.credit(id(7), Amount::new(3), Amount::ZERO),
            l.credit(id(2), Amount::ZERO, Amount::new(1)),
        ) else {
            panic!("expected Ok");
        };
        l.rollback(saved);
        assert_eq!(l.reserves(id(1)), BinReserves::new(Amount::new(10), Amount::ZERO));
        // bin 7 did not exist before and is gone again
        assert_eq!(l.len(), 2);
        // bin 2 was not captured, so its change survives
        assert_eq!(l.reserves(id(2)).reserve1(), Amount::new(6));
    }

    // -- walk -----------------------------------------------------------------

    #[test]
    fn walk_down_skips_bins_without_asset() {
        let l = ledger(&[(-10_000, 7, 0), (-5, 0, 3), (0, 1, 1), (10_000, 0, 9)]);
        let ids: Vec<i32> = l
            .walk(id(0), WalkDirection::Down, Asset::Token0)
            .map(|(b, _)| b.get())
            .collect();
        assert_eq!(ids, vec![0, -10_000]);
    }

    #[test]
    fn walk_up_starts_inclusive() {
        let l = ledger(&[(-10_000, 7, 0), (0, 1, 1), (10_000, 0, 9)]);
        let ids: Vec<i32> = l
            .walk(id(0), WalkDirection::Up, Asset::Token1)
            .map(|(b, _)| b.get())
            .collect();
        assert_eq!(ids, vec![0, 10_000]);
        let from_far: Vec<i32> = l
            .walk(id(-20_000), WalkDirection::Up, Asset::Token0)
            .map(|(b, _)| b.get())
            .collect();
        assert_eq!(from_far, vec![-10_000, 0]);
    }
}
